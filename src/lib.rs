// ABOUTME: Main library entry point for the junior athlete meal-quality scoring engine
// ABOUTME: Exposes configuration, the scoring pipeline, and logging setup over the nutrition-core types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Junior Nutrition
//!
//! A deterministic rules pipeline that scores free-text meal descriptions for
//! junior athletes. Given a description plus optional timing and age context
//! it classifies the meal into a quality tier, computes a 0-100 score,
//! estimates macros, and emits up to three coaching suggestions. A second
//! function folds a day of scored meals into a daily nutrition score.
//!
//! Every scoring function is total: empty descriptions, malformed times, and
//! missing context all produce a result. Errors only arise when loading
//! configuration or data from the environment and the filesystem.
//!
//! ## Architecture
//!
//! - **config**: Tier weights, multipliers, and daily settings with `NUTRITION_*` overrides
//! - **intelligence**: Knowledge base and the scoring pipeline components
//! - **logging**: `tracing` subscriber setup for binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use junior_nutrition::{analyze_food_quality, classify_timing, MealSlot, QualityTier};
//!
//! let timing = classify_timing(MealSlot::Lunch, "12:00");
//! let result = analyze_food_quality("pasta with grilled chicken", Some(timing), Some(14), None);
//!
//! assert!(result.score <= 100);
//! assert!(result.suggestions.len() <= 3);
//! assert_ne!(result.quality, QualityTier::Poor);
//! ```

/// Scoring configuration and configuration errors
pub mod config;

/// Knowledge base and meal scoring pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use config::{ConfigError, ScoringConfig};
pub use intelligence::{
    aggregate_daily_score, analyze_food_quality, analyze_meal, analyze_meals_batch,
    classify_timing, classify_timing_at, derive_age_group, estimate_macros, KnowledgeBase,
    MealAnalysisParams,
};
pub use nutrition_core::errors::ErrorResponse;
pub use nutrition_core::{
    AgeGroup, AppError, AppResult, DailyNutritionScore, ErrorCode, LoggedMeal, MacroEstimate,
    MealSlot, MealTiming, NutritionAnalysisResult, QualityScored, QualityTier,
};
