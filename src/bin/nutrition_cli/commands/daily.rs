// ABOUTME: Daily score command for nutrition-cli
// ABOUTME: Reads a JSON array of logged meals and prints the aggregated daily nutrition score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use junior_nutrition::{aggregate_daily_score, AppResult, LoggedMeal};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;

/// Aggregate the meals in `path` and print the daily score as JSON
pub fn run(path: &Path) -> AppResult<()> {
    let contents = fs::read_to_string(path)?;
    let meals: Vec<LoggedMeal> = serde_json::from_str(&contents)?;
    info!(path = %path.display(), meals = meals.len(), "Loaded logged meals");

    let score = aggregate_daily_score(&meals);
    print_json(&score)
}
