// ABOUTME: Daily aggregator combining one day's scored meal entries into a daily nutrition score
// ABOUTME: Blends meal frequency against the expected meal count with average quality points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ScoringConfig;
use nutrition_core::{DailyNutritionScore, QualityScored, QualityTier};

/// Tier assumed for entries whose quality is missing or unrecognised
pub const FALLBACK_TIER: QualityTier = QualityTier::Fair;

/// Aggregate one day's entries
///
/// An empty day scores zero across the board.
#[must_use]
pub fn aggregate<T: QualityScored>(entries: &[T], config: &ScoringConfig) -> DailyNutritionScore {
    if entries.is_empty() {
        return DailyNutritionScore::default();
    }

    let count = entries.len() as f64;
    let expected = f64::from(config.daily.expected_meals_per_day.max(1));
    let meal_frequency = (count / expected * 100.0).min(100.0).round();

    let total_points: f64 = entries
        .iter()
        .map(|entry| {
            let tier = entry.quality_tier().unwrap_or(FALLBACK_TIER);
            config.tier_weights.weight_for(tier)
        })
        .sum();
    let food_quality = (total_points / count).clamp(0.0, 100.0).round();

    let total = meal_frequency.mul_add(
        config.daily.frequency_weight,
        food_quality * config.daily.quality_weight,
    );

    DailyNutritionScore {
        meal_frequency: meal_frequency as u8,
        food_quality: food_quality as u8,
        total_score: total.clamp(0.0, 100.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::LoggedMeal;

    fn run<T: QualityScored>(entries: &[T]) -> DailyNutritionScore {
        aggregate(entries, &ScoringConfig::default())
    }

    #[test]
    fn test_empty_day_is_zero() {
        let entries: [QualityTier; 0] = [];
        assert_eq!(run(&entries), DailyNutritionScore::default());
    }

    #[test]
    fn test_five_excellent_meals_score_100() {
        let entries = [QualityTier::Excellent; 5];
        let score = run(&entries);
        assert_eq!(score.meal_frequency, 100);
        assert_eq!(score.food_quality, 100);
        assert_eq!(score.total_score, 100);
    }

    #[test]
    fn test_frequency_caps_at_100() {
        let entries = [QualityTier::Poor; 8];
        let score = run(&entries);
        assert_eq!(score.meal_frequency, 100);
        assert_eq!(score.food_quality, 25);
        // 100 * 0.4 + 25 * 0.6
        assert_eq!(score.total_score, 55);
    }

    #[test]
    fn test_partial_day_mixed_quality() {
        let entries = [QualityTier::Excellent, QualityTier::Good, QualityTier::Poor];
        let score = run(&entries);
        assert_eq!(score.meal_frequency, 60);
        // (100 + 75 + 25) / 3 = 66.67
        assert_eq!(score.food_quality, 67);
        // 60 * 0.4 + 67 * 0.6 = 64.2
        assert_eq!(score.total_score, 64);
    }

    #[test]
    fn test_unknown_quality_counts_as_fair() {
        let entries = vec![
            LoggedMeal {
                quality: Some("stellar".to_owned()),
                ..LoggedMeal::default()
            },
            LoggedMeal::default(),
        ];
        let score = run(&entries);
        assert_eq!(score.meal_frequency, 40);
        assert_eq!(score.food_quality, 50);
        assert_eq!(score.total_score, 46);
    }
}
