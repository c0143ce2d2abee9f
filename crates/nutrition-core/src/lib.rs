// ABOUTME: Core types for the junior athlete meal-quality scoring engine
// ABOUTME: Foundation crate with error handling and the closed enums shared by every layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing the shared vocabulary of the scoring engine. The
//! persistence layer, the interactive preview, and the engine itself all
//! depend on these types so that a preview score and a saved score can never
//! drift apart.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Quality tiers, meal slots, timing contexts, age groups, and analysis results

/// Unified error handling system with standard error codes
pub mod errors;

/// Meal classification enums and analysis result models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    AgeGroup, DailyNutritionScore, LoggedMeal, MacroEstimate, MealSlot, MealTiming,
    NutritionAnalysisResult, QualityScored, QualityTier,
};
