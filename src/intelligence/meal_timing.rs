// ABOUTME: Meal timing classifier mapping a meal slot and clock time to an activity context
// ABOUTME: Lunch near midday reads as pre-game, dinner in the early evening as post-game
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Timing Classifier
//!
//! The lunch and dinner windows stand in for "a match is near" because no
//! schedule is available to the engine. They approximate typical weekend
//! match times and are kept as-is.

use chrono::{NaiveTime, Timelike};
use nutrition_core::{MealSlot, MealTiming};
use std::ops::RangeInclusive;

/// Lunch hours treated as pre-game
pub const PRE_GAME_LUNCH_HOURS: RangeInclusive<u32> = 11..=13;

/// Dinner hours treated as post-game
pub const POST_GAME_DINNER_HOURS: RangeInclusive<u32> = 18..=20;

/// Classify a meal from its slot and an `HH:MM` time string
///
/// Only the hour is considered. A time whose hour is not numeric resolves to
/// [`MealTiming::Regular`] unless the slot alone decides the outcome.
#[must_use]
pub fn classify_timing(slot: MealSlot, time: &str) -> MealTiming {
    classify_hour(slot, parse_hour(time))
}

/// Classify a meal from its slot and a parsed clock time
#[must_use]
pub fn classify_timing_at(slot: MealSlot, time: NaiveTime) -> MealTiming {
    classify_hour(slot, Some(time.hour()))
}

fn classify_hour(slot: MealSlot, hour: Option<u32>) -> MealTiming {
    match (slot, hour) {
        (MealSlot::AfterPractice, _) => MealTiming::AfterPractice,
        (MealSlot::Lunch, Some(h)) if PRE_GAME_LUNCH_HOURS.contains(&h) => MealTiming::PreGame,
        (MealSlot::Dinner, Some(h)) if POST_GAME_DINNER_HOURS.contains(&h) => MealTiming::PostGame,
        _ => MealTiming::Regular,
    }
}

/// Leading hour of an `HH:MM` string; `None` when it is not a number
fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}
