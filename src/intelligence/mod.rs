// ABOUTME: Meal-quality scoring engine: knowledge base plus the pure scoring pipeline components
// ABOUTME: Re-exports the public entry points consumed by persistence, preview, and CLI callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! A deterministic rules pipeline that turns a free-text meal description
//! plus optional context into a scored [`nutrition_core::NutritionAnalysisResult`],
//! and folds a day of scored meals into a [`nutrition_core::DailyNutritionScore`].
//!
//! Keyword matching against the curated [`KnowledgeBase`] is the entire
//! "understanding" mechanism. There is no NLP and no food database lookup.

/// Curated tier → keyword lists, loaded once per process
pub mod knowledge_base;

/// Meal slot and clock time → timing context
pub mod meal_timing;

/// Description → base score and matched keywords
pub mod quality_classifier;

/// Timing multipliers and age-group adjustments
pub mod context_adjuster;

/// Coaching messages
pub mod suggestions;

/// Heuristic calories and macros
pub mod macro_estimator;

/// Daily nutrition score
pub mod daily_aggregator;

/// Public entry points
pub mod meal_scoring;

pub use context_adjuster::Adjustment;
pub use knowledge_base::{FoodCategory, KnowledgeBase, KnowledgeBaseDocument};
pub use meal_scoring::{
    aggregate_daily_score, analyze_food_quality, analyze_meal, analyze_meals_batch,
    derive_age_group, estimate_macros, MealAnalysisParams,
};
pub use meal_timing::{classify_timing, classify_timing_at};
pub use quality_classifier::Classification;
