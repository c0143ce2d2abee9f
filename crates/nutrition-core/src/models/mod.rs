// ABOUTME: Data models shared between the scoring engine and its callers
// ABOUTME: Re-exports meal classification enums and analysis result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Quality tier, meal slot, timing context, and age group enums
pub mod meal;

/// Per-meal and per-day analysis results
pub mod analysis;

pub use analysis::{
    DailyNutritionScore, LoggedMeal, MacroEstimate, NutritionAnalysisResult, QualityScored,
};
pub use meal::{AgeGroup, MealSlot, MealTiming, QualityTier};
