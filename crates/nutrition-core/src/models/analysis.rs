// ABOUTME: Result models produced by the meal scoring engine and daily aggregation
// ABOUTME: NutritionAnalysisResult, MacroEstimate, DailyNutritionScore, and LoggedMeal definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::QualityTier;
use serde::{Deserialize, Serialize};

/// Rough calories/macros guess derived from keyword presence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroEstimate {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fats: u32,
}

/// Complete analysis of one meal description
///
/// Created fresh per call and never mutated. The persistence layer stores
/// `score`, `quality`, and the macro fields alongside the logged entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysisResult {
    /// Tier derived from the final score
    pub quality: QualityTier,
    /// Final score, 0-100
    pub score: u8,
    /// At most three coaching messages, quality feedback first
    pub suggestions: Vec<String>,
    /// Matched keywords in knowledge-base order (overlapping keywords all appear)
    pub identified_foods: Vec<String>,
    /// Heuristic macro estimate
    pub macro_estimate: MacroEstimate,
    /// Timing multiplier that was applied; absent when no timing was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_score: Option<u32>,
    /// Flat age-group bonus points added to the score
    #[serde(default)]
    pub age_bonus: u32,
    /// Version of the knowledge base that produced this result
    #[serde(default)]
    pub knowledge_base_version: String,
}

/// Aggregate score for one day of logged meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionScore {
    /// How close the day came to the expected meal count, 0-100
    pub meal_frequency: u8,
    /// Average meal quality points, 0-100
    pub food_quality: u8,
    /// Weighted blend of frequency and quality, 0-100
    pub total_score: u8,
}

/// A meal entry as the persistence layer hands it back for aggregation
///
/// Only `quality` matters to the aggregator. It stays a raw string so that an
/// unknown or missing tier degrades to `fair` instead of failing the whole day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMeal {
    /// Original description, if the caller kept it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stored quality tier spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Stored score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

/// Anything carrying a (possibly missing) quality tier can be aggregated
pub trait QualityScored {
    /// The entry's tier, or `None` when it is missing or unrecognised
    fn quality_tier(&self) -> Option<QualityTier>;
}

impl QualityScored for QualityTier {
    fn quality_tier(&self) -> Option<QualityTier> {
        Some(*self)
    }
}

impl QualityScored for Option<QualityTier> {
    fn quality_tier(&self) -> Option<QualityTier> {
        *self
    }
}

impl QualityScored for NutritionAnalysisResult {
    fn quality_tier(&self) -> Option<QualityTier> {
        Some(self.quality)
    }
}

impl QualityScored for LoggedMeal {
    fn quality_tier(&self) -> Option<QualityTier> {
        self.quality.as_deref().and_then(QualityTier::from_str_lossy)
    }
}

impl<T: QualityScored + ?Sized> QualityScored for &T {
    fn quality_tier(&self) -> Option<QualityTier> {
        (**self).quality_tier()
    }
}
