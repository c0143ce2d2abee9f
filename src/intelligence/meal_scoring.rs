// ABOUTME: Meal scoring entry points composing classification, context, suggestions, and macros
// ABOUTME: Single-meal, batch, and daily aggregation APIs over the knowledge base and scoring config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Scoring
//!
//! Data flows one way: description and context go through the quality
//! classifier, then the context adjuster, then the suggestion generator and
//! macro estimator, ending in one [`NutritionAnalysisResult`].
//!
//! Every function here is pure over its inputs and the immutable knowledge
//! base. The same inputs against the same knowledge-base version always yield
//! the same result, so results may be computed on any thread.

use super::context_adjuster;
use super::daily_aggregator;
use super::knowledge_base::KnowledgeBase;
use super::macro_estimator;
use super::quality_classifier;
use super::suggestions;
use crate::config::ScoringConfig;
use nutrition_core::{
    AgeGroup, DailyNutritionScore, MacroEstimate, MealTiming, NutritionAnalysisResult,
    QualityScored, QualityTier,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for analysing one meal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAnalysisParams {
    /// Free-text meal description
    pub description: String,
    /// Activity context, if known
    #[serde(default)]
    pub timing: Option<MealTiming>,
    /// Player age in years; bucketed when no age group is given
    #[serde(default)]
    pub age: Option<u32>,
    /// Explicit age group; takes precedence over `age`
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
}

impl MealAnalysisParams {
    /// Parameters for a description with no context
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the timing context
    #[must_use]
    pub const fn with_timing(mut self, timing: MealTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Set the player age
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the age group explicitly
    #[must_use]
    pub const fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = Some(age_group);
        self
    }

    /// Age group used for scoring: the explicit group, else the bucketed age
    #[must_use]
    pub fn effective_age_group(&self) -> Option<AgeGroup> {
        self.age_group.or_else(|| self.age.map(derive_age_group))
    }
}

/// Analyse one meal against an explicit knowledge base and configuration
#[must_use]
pub fn analyze_meal(
    params: &MealAnalysisParams,
    kb: &KnowledgeBase,
    config: &ScoringConfig,
) -> NutritionAnalysisResult {
    let age_group = params.effective_age_group();

    // Step 1: Keyword classification
    let classification = quality_classifier::classify(&params.description, kb, config);

    // Step 2: Timing and age context
    let adjustment = context_adjuster::adjust(
        classification.base_score,
        &params.description,
        params.timing,
        age_group,
        config,
    );
    let quality = QualityTier::from_score(adjustment.score);

    // Step 3: Coaching and macros
    let suggestions = suggestions::suggest(
        quality,
        params.timing,
        age_group,
        config.suggestions.max_suggestions,
    );
    let macro_estimate = macro_estimator::estimate(&params.description, &config.macros);

    debug!(
        matches = classification.match_count,
        base_score = classification.base_score,
        score = adjustment.score,
        quality = %quality,
        timing = ?params.timing,
        age_group = ?age_group,
        "Meal analysed"
    );

    NutritionAnalysisResult {
        quality,
        score: adjustment.score,
        suggestions,
        identified_foods: classification.matched_keywords,
        macro_estimate,
        timing_score: adjustment.timing_score,
        age_bonus: adjustment.age_bonus,
        knowledge_base_version: kb.version().to_owned(),
    }
}

/// Analyse one meal with the process-wide knowledge base and configuration
///
/// An explicit `age_group` takes precedence over `age`.
#[must_use]
pub fn analyze_food_quality(
    description: &str,
    timing: Option<MealTiming>,
    age: Option<u32>,
    age_group: Option<AgeGroup>,
) -> NutritionAnalysisResult {
    let params = MealAnalysisParams {
        description: description.to_owned(),
        timing,
        age,
        age_group,
    };
    analyze_meal(&params, KnowledgeBase::global(), ScoringConfig::global())
}

/// Analyse many meals in parallel; output order matches input order
#[must_use]
pub fn analyze_meals_batch(
    meals: &[MealAnalysisParams],
    kb: &KnowledgeBase,
    config: &ScoringConfig,
) -> Vec<NutritionAnalysisResult> {
    meals
        .par_iter()
        .map(|params| analyze_meal(params, kb, config))
        .collect()
}

/// Aggregate one day's entries with the process-wide configuration
#[must_use]
pub fn aggregate_daily_score<T: QualityScored>(entries: &[T]) -> DailyNutritionScore {
    daily_aggregator::aggregate(entries, ScoringConfig::global())
}

/// Estimate macros with the process-wide configuration
#[must_use]
pub fn estimate_macros(description: &str) -> MacroEstimate {
    macro_estimator::estimate(description, &ScoringConfig::global().macros)
}

/// Bucket an integer age into its age group
#[must_use]
pub const fn derive_age_group(age: u32) -> AgeGroup {
    AgeGroup::from_age(age)
}
