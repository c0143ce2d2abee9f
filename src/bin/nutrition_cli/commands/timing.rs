// ABOUTME: Meal timing command for nutrition-cli
// ABOUTME: Prints the timing context a meal slot and clock time resolve to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use junior_nutrition::{classify_timing, AppResult, MealSlot};
use serde_json::json;

use crate::helpers::display::print_json;

/// Classify a slot and time and print the result as JSON
pub fn run(slot: MealSlot, time: &str) -> AppResult<()> {
    let timing = classify_timing(slot, time);
    print_json(&json!({
        "slot": slot,
        "time": time,
        "timing": timing,
    }))
}
