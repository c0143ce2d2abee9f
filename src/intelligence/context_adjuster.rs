// ABOUTME: Context adjuster applying timing multipliers and age-group scaling/bonuses to a base score
// ABOUTME: Produces the final clamped 0-100 meal score plus the applied timing multiplier and age bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Context Adjuster
//!
//! Final score is `clamp(scaled_base × multiplier / 100 + age_bonus, 0, 100)`,
//! rounded to the nearest integer, where `scaled_base` is the base score after
//! any age-group scaling.

use crate::config::{AgeAdjustmentConfig, ScoringConfig, TimingAdjustmentConfig};
use nutrition_core::{AgeGroup, MealTiming};

/// Carbohydrate staples that suit a pre-game meal
const PRE_GAME_CARB_KEYWORDS: &[&str] = &["pasta", "rice", "bread"];
/// Hard-to-digest food before a game
const PRE_GAME_HEAVY_KEYWORDS: &[&str] = &["heavy", "fried", "cream"];
/// Recovery protein after a game
const POST_GAME_RECOVERY_KEYWORDS: &[&str] = &["protein", "shake", "milk"];
/// Rehydration after a game
const POST_GAME_HYDRATION_KEYWORDS: &[&str] = &["water", "fruit"];

const PRETEEN_DAIRY_KEYWORDS: &[&str] = &["milk", "yogurt", "cheese"];
const EARLY_TEEN_PROTEIN_KEYWORDS: &[&str] = &["protein", "meat", "eggs"];
const LATE_TEEN_LEAN_KEYWORDS: &[&str] = &["lean", "grilled", "whole"];

/// Outcome of adjusting a base score for meal context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// Final clamped score
    pub score: u8,
    /// Applied timing multiplier, present only when timing was supplied
    pub timing_score: Option<u32>,
    /// Flat age-group bonus points
    pub age_bonus: u32,
}

/// Apply timing and age-group context to a base score
#[must_use]
pub fn adjust(
    base_score: f64,
    description: &str,
    timing: Option<MealTiming>,
    age_group: Option<AgeGroup>,
    config: &ScoringConfig,
) -> Adjustment {
    let text = description.to_lowercase();

    let multiplier = timing.map_or(config.timing.default_multiplier, |timing| {
        timing_multiplier(timing, &text, &config.timing)
    });

    let (scaled_base, age_bonus) = age_group.map_or((base_score, 0), |group| {
        age_adjustment(group, base_score, &text, &config.age)
    });

    let raw = scaled_base.mul_add(f64::from(multiplier) / 100.0, f64::from(age_bonus));

    Adjustment {
        score: raw.clamp(0.0, 100.0).round() as u8,
        timing_score: timing.map(|_| multiplier),
        age_bonus,
    }
}

/// Percentage multiplier for a timing context
#[must_use]
pub fn timing_multiplier(timing: MealTiming, text: &str, config: &TimingAdjustmentConfig) -> u32 {
    match timing {
        MealTiming::PreGame if contains_any(text, PRE_GAME_CARB_KEYWORDS) => {
            config.pre_game_carb_multiplier
        }
        MealTiming::PreGame if contains_any(text, PRE_GAME_HEAVY_KEYWORDS) => {
            config.pre_game_heavy_multiplier
        }
        MealTiming::PostGame if contains_any(text, POST_GAME_RECOVERY_KEYWORDS) => {
            config.post_game_recovery_multiplier
        }
        MealTiming::PostGame if contains_any(text, POST_GAME_HYDRATION_KEYWORDS) => {
            config.post_game_hydration_multiplier
        }
        MealTiming::PreGame
        | MealTiming::PostGame
        | MealTiming::AfterPractice
        | MealTiming::Regular => config.default_multiplier,
    }
}

/// Age-scaled base score and flat bonus for an age group
#[must_use]
pub fn age_adjustment(
    group: AgeGroup,
    base_score: f64,
    text: &str,
    config: &AgeAdjustmentConfig,
) -> (f64, u32) {
    match group {
        AgeGroup::Preteen => {
            let scaled = (base_score * config.preteen_scale).min(100.0);
            let bonus = if contains_any(text, PRETEEN_DAIRY_KEYWORDS) {
                config.preteen_dairy_bonus
            } else {
                0
            };
            (scaled, bonus)
        }
        AgeGroup::EarlyTeen => (
            base_score,
            bonus_if(text, EARLY_TEEN_PROTEIN_KEYWORDS, config.early_teen_protein_bonus),
        ),
        AgeGroup::LateTeen => (
            base_score,
            bonus_if(text, LATE_TEEN_LEAN_KEYWORDS, config.late_teen_lean_bonus),
        ),
        AgeGroup::YoungAdult => (base_score * config.young_adult_scale, 0),
    }
}

fn bonus_if(text: &str, keywords: &[&str], bonus: u32) -> u32 {
    if contains_any(text, keywords) {
        bonus
    } else {
        0
    }
}

pub(super) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
