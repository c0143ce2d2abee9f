// ABOUTME: Heuristic calories and macronutrient estimate from keyword families and portion qualifiers
// ABOUTME: Each detected family adds a fixed increment; a portion multiplier then scales every field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Estimator
//!
//! A rough guess, not a nutrition database lookup. Families stack, but each
//! family is counted once per description no matter how many of its
//! keywords appear.

use super::context_adjuster::contains_any;
use crate::config::{MacroContribution, MacroEstimateConfig};
use nutrition_core::MacroEstimate;

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "fish", "salmon", "tuna", "turkey", "egg", "tofu", "beans", "meat", "pork",
    "steak", "protein",
];
const STARCH_KEYWORDS: &[&str] = &[
    "rice", "pasta", "bread", "potato", "noodles", "oat", "cereal", "tortilla", "bagel", "quinoa",
];
const FAT_KEYWORDS: &[&str] = &[
    "cheese", "butter", "oil", "fried", "avocado", "nuts", "peanut butter", "cream", "bacon",
];
const VEGETABLE_KEYWORDS: &[&str] = &[
    "vegetable", "veggie", "salad", "broccoli", "spinach", "carrot", "lettuce", "greens",
    "pepper",
];
const FRUIT_KEYWORDS: &[&str] = &[
    "fruit", "apple", "banana", "berr", "orange", "grape", "strawberr", "mango",
];
const SHAKE_KEYWORDS: &[&str] = &["shake", "smoothie"];

const LARGE_PORTION_KEYWORDS: &[&str] = &["large", "big"];
const SMALL_PORTION_KEYWORDS: &[&str] = &["small", "little"];

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
}

impl Totals {
    fn add(&mut self, contribution: &MacroContribution) {
        self.calories += contribution.calories;
        self.protein += contribution.protein;
        self.carbs += contribution.carbs;
        self.fats += contribution.fats;
    }
}

/// Estimate calories and macros for a meal description
#[must_use]
pub fn estimate(description: &str, config: &MacroEstimateConfig) -> MacroEstimate {
    let text = description.to_lowercase();

    let mut totals = Totals::default();
    totals.add(&config.base);

    let families = [
        (PROTEIN_KEYWORDS, &config.protein_source),
        (STARCH_KEYWORDS, &config.starch_source),
        (FAT_KEYWORDS, &config.fat_source),
        (VEGETABLE_KEYWORDS, &config.vegetables),
        (FRUIT_KEYWORDS, &config.fruit),
        (SHAKE_KEYWORDS, &config.shake),
    ];
    for (keywords, contribution) in families {
        if contains_any(&text, keywords) {
            totals.add(contribution);
        }
    }

    let portion = portion_multiplier(&text, config);

    MacroEstimate {
        calories: scale(totals.calories, portion),
        protein: scale(totals.protein, portion),
        carbs: scale(totals.carbs, portion),
        fats: scale(totals.fats, portion),
    }
}

/// Portion multiplier implied by size words; large wins when both appear
#[must_use]
pub fn portion_multiplier(text: &str, config: &MacroEstimateConfig) -> f64 {
    if contains_any(text, LARGE_PORTION_KEYWORDS) {
        config.large_portion_multiplier
    } else if contains_any(text, SMALL_PORTION_KEYWORDS) {
        config.small_portion_multiplier
    } else {
        1.0
    }
}

fn scale(value: f64, portion: f64) -> u32 {
    (value * portion).round().max(0.0) as u32
}
