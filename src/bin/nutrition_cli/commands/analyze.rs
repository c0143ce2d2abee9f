// ABOUTME: Meal analysis command for nutrition-cli
// ABOUTME: Scores one description with the process-wide knowledge base and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use junior_nutrition::intelligence::{analyze_meal, KnowledgeBase, MealAnalysisParams};
use junior_nutrition::{AgeGroup, AppResult, MealTiming, ScoringConfig};

use crate::helpers::display::print_json;

/// Analyze a meal description and print the result as JSON
pub fn run(
    description: String,
    timing: Option<MealTiming>,
    age: Option<u32>,
    age_group: Option<AgeGroup>,
) -> AppResult<()> {
    let params = MealAnalysisParams {
        description,
        timing,
        age,
        age_group,
    };
    let result = analyze_meal(&params, KnowledgeBase::global(), ScoringConfig::global());

    print_json(&result)
}
