// ABOUTME: Configuration module for the meal scoring engine
// ABOUTME: Re-exports scoring configuration types and configuration error variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **scoring**: Every tunable weight, multiplier, and threshold of the pipeline,
//!   loaded once from defaults plus `NUTRITION_*` environment overrides
//! - **error**: Validation failures for configuration and knowledge-base data

/// Configuration error types
pub mod error;

/// Scoring weights, multipliers, and daily aggregation settings
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    AgeAdjustmentConfig, DailyScoreConfig, MacroContribution, MacroEstimateConfig,
    ScoringConfig, SuggestionConfig, TierWeightsConfig, TimingAdjustmentConfig,
};
