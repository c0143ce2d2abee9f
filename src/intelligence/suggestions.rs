// ABOUTME: Coaching suggestion generator driven by quality tier, meal timing, and age group
// ABOUTME: Quality feedback comes first, then timing tips, then age tips, truncated to the configured limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::{AgeGroup, MealTiming, QualityTier};

/// Messages for a quality tier
#[must_use]
pub const fn quality_messages(quality: QualityTier) -> &'static [&'static str] {
    match quality {
        QualityTier::Poor => &[
            "Try to include more whole foods and vegetables",
            "Reduce processed and sugary foods",
        ],
        QualityTier::Fair => &[
            "Add a lean protein source to this meal",
            "Include colorful vegetables for more nutrients",
        ],
        QualityTier::Good | QualityTier::Excellent => &[],
    }
}

/// Messages for a timing context
#[must_use]
pub const fn timing_messages(timing: MealTiming) -> &'static [&'static str] {
    match timing {
        MealTiming::PreGame => &[
            "Focus on easily digestible carbohydrates before the game",
            "Avoid heavy, fried, or high-fat foods before playing",
        ],
        MealTiming::PostGame => &[
            "Refuel with protein and carbohydrates within an hour after the game",
            "Rehydrate with water or milk after playing",
        ],
        MealTiming::AfterPractice | MealTiming::Regular => &[],
    }
}

/// Messages for an age group
#[must_use]
pub const fn age_messages(age_group: AgeGroup) -> &'static [&'static str] {
    match age_group {
        AgeGroup::Preteen => &[
            "Include calcium-rich foods like milk or yogurt for growing bones",
            "Drink water regularly throughout the day",
        ],
        AgeGroup::EarlyTeen => &[
            "Growing athletes need larger portions on training days",
            "Include protein at every meal to support growth",
        ],
        AgeGroup::LateTeen => &[
            "Time meals 2-3 hours before training for best energy",
            "Limit sports drinks to intense sessions longer than an hour",
        ],
        AgeGroup::YoungAdult => &[
            "Watch portion sizes to match your training load",
            "Time protein and carbs around training for recovery",
        ],
    }
}

/// Build coaching suggestions, keeping at most `max` in priority order
#[must_use]
pub fn suggest(
    quality: QualityTier,
    timing: Option<MealTiming>,
    age_group: Option<AgeGroup>,
    max: usize,
) -> Vec<String> {
    let timing = timing.map_or(&[][..], timing_messages);
    let age = age_group.map_or(&[][..], age_messages);

    quality_messages(quality)
        .iter()
        .chain(timing)
        .chain(age)
        .take(max)
        .map(|&message| message.to_owned())
        .collect()
}
