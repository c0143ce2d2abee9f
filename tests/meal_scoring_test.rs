// ABOUTME: Integration tests for the meal scoring public API
// ABOUTME: Covers score ranges, tier expectations, timing, age adjustments, macros, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use junior_nutrition::intelligence::macro_estimator;
use junior_nutrition::{
    analyze_food_quality, analyze_meal, analyze_meals_batch, classify_timing, derive_age_group,
    estimate_macros, AgeGroup, MealAnalysisParams, MealSlot, MealTiming, QualityTier,
};

mod common;

const DESCRIPTIONS: &[&str] = &[
    "",
    "   ",
    "grilled chicken with vegetables",
    "chips and soda",
    "large pizza with extra cheese and a milkshake",
    "small bowl of oatmeal with berries and milk",
    "pasta, rice, bread and more pasta",
    "protein shake with banana and water",
    "fried chicken and fries",
    "salmon, quinoa, spinach, sweet potato, brown rice, greek yogurt, avocado",
    "mystery casserole",
];

const TIMINGS: [Option<MealTiming>; 5] = [
    None,
    Some(MealTiming::PreGame),
    Some(MealTiming::PostGame),
    Some(MealTiming::AfterPractice),
    Some(MealTiming::Regular),
];

const AGE_GROUPS: [Option<AgeGroup>; 5] = [
    None,
    Some(AgeGroup::Preteen),
    Some(AgeGroup::EarlyTeen),
    Some(AgeGroup::LateTeen),
    Some(AgeGroup::YoungAdult),
];

// ============================================================================
// RANGE AND SHAPE TESTS
// ============================================================================

#[test]
fn test_scores_and_suggestions_stay_in_range() {
    let (kb, config) = common::builtin_engine();

    for description in DESCRIPTIONS {
        for timing in TIMINGS {
            for age_group in AGE_GROUPS {
                let mut params = MealAnalysisParams::new(*description);
                params.timing = timing;
                params.age_group = age_group;

                let result = analyze_meal(&params, &kb, &config);
                assert!(result.score <= 100, "{description}: {}", result.score);
                assert!(result.suggestions.len() <= 3);
                assert_eq!(result.quality, QualityTier::from_score(result.score));
                assert_eq!(result.timing_score.is_some(), timing.is_some());
            }
        }
    }
}

#[test]
fn test_empty_description_is_fair_50() {
    let (kb, config) = common::builtin_engine();
    let result = analyze_meal(&MealAnalysisParams::new(""), &kb, &config);

    assert_eq!(result.quality, QualityTier::Fair);
    assert_eq!(result.score, 50);
    assert!(result.identified_foods.is_empty());
    assert_eq!(result.age_bonus, 0);
}

#[test]
fn test_whitespace_description_is_fair_50() {
    let (kb, config) = common::builtin_engine();
    let result = analyze_meal(&MealAnalysisParams::new("  \t "), &kb, &config);
    assert_eq!(result.score, 50);
}

// ============================================================================
// QUALITY TIER TESTS
// ============================================================================

#[test]
fn test_grilled_chicken_with_vegetables_is_good_or_better() {
    common::init_test_logging();
    let result = analyze_food_quality("grilled chicken with vegetables", None, None, None);
    assert!(matches!(
        result.quality,
        QualityTier::Good | QualityTier::Excellent
    ));
    assert!(result
        .identified_foods
        .contains(&"grilled chicken".to_owned()));
}

#[test]
fn test_chips_and_soda_is_poor() {
    common::init_test_logging();
    let result = analyze_food_quality("chips and soda", None, None, None);
    assert_eq!(result.quality, QualityTier::Poor);
    assert_eq!(
        result.suggestions.first().map(String::as_str),
        Some("Try to include more whole foods and vegetables")
    );
}

#[test]
fn test_identified_foods_follow_knowledge_base_order() {
    let (kb, config) = common::builtin_engine();
    let result = analyze_meal(
        &MealAnalysisParams::new("soda with a salad and chicken"),
        &kb,
        &config,
    );
    // excellent before good before poor, regardless of description order
    assert_eq!(result.identified_foods, vec!["salad", "chicken", "soda"]);
}

#[test]
fn test_matching_is_case_insensitive() {
    let (kb, config) = common::builtin_engine();
    let lower = analyze_meal(&MealAnalysisParams::new("salmon and rice"), &kb, &config);
    let upper = analyze_meal(&MealAnalysisParams::new("SALMON AND RICE"), &kb, &config);
    assert_eq!(lower.score, upper.score);
    assert_eq!(lower.identified_foods, upper.identified_foods);
}

// ============================================================================
// CONTEXT TESTS
// ============================================================================

#[test]
fn test_pre_game_lunch_pipeline() {
    let (kb, config) = common::builtin_engine();
    let timing = classify_timing(MealSlot::Lunch, "12:30");
    assert_eq!(timing, MealTiming::PreGame);

    let result = analyze_meal(
        &MealAnalysisParams::new("pasta").with_timing(timing),
        &kb,
        &config,
    );
    // pasta (good, 75) x 1.2
    assert_eq!(result.score, 90);
    assert_eq!(result.timing_score, Some(120));
    assert_eq!(
        result.suggestions.first().map(String::as_str),
        Some("Focus on easily digestible carbohydrates before the game")
    );
}

#[test]
fn test_preteen_with_milk_never_scores_lower() {
    let (kb, config) = common::builtin_engine();
    for description in [
        "milk",
        "cereal with milk",
        "chocolate milk and cookies",
        "grilled chicken and a glass of milk",
    ] {
        let plain = analyze_meal(&MealAnalysisParams::new(description), &kb, &config);
        let preteen = analyze_meal(
            &MealAnalysisParams::new(description).with_age_group(AgeGroup::Preteen),
            &kb,
            &config,
        );
        assert!(
            preteen.score >= plain.score,
            "{description}: {} < {}",
            preteen.score,
            plain.score
        );
        assert_eq!(preteen.age_bonus, 15);
    }
}

#[test]
fn test_age_alone_is_bucketed() {
    let (kb, config) = common::builtin_engine();
    let by_age = analyze_meal(
        &MealAnalysisParams::new("eggs and toast").with_age(14),
        &kb,
        &config,
    );
    let by_group = analyze_meal(
        &MealAnalysisParams::new("eggs and toast").with_age_group(AgeGroup::EarlyTeen),
        &kb,
        &config,
    );
    assert_eq!(by_age, by_group);
    assert_eq!(by_age.age_bonus, 10);
}

#[test]
fn test_derive_age_group_is_total() {
    assert_eq!(derive_age_group(0), AgeGroup::Preteen);
    assert_eq!(derive_age_group(12), AgeGroup::Preteen);
    assert_eq!(derive_age_group(13), AgeGroup::EarlyTeen);
    assert_eq!(derive_age_group(18), AgeGroup::LateTeen);
    assert_eq!(derive_age_group(19), AgeGroup::YoungAdult);
    assert_eq!(derive_age_group(u32::MAX), AgeGroup::YoungAdult);
}

#[test]
fn test_classify_timing_reference_cases() {
    assert_eq!(classify_timing(MealSlot::Lunch, "12:00"), MealTiming::PreGame);
    assert_eq!(classify_timing(MealSlot::Dinner, "19:00"), MealTiming::PostGame);
    assert_eq!(
        classify_timing(MealSlot::Breakfast, "08:00"),
        MealTiming::Regular
    );
    assert_eq!(
        classify_timing(MealSlot::AfterPractice, "15:00"),
        MealTiming::AfterPractice
    );
    assert_eq!(
        classify_timing(MealSlot::Lunch, "lunchtime"),
        MealTiming::Regular
    );
}

// ============================================================================
// MACRO ESTIMATE TESTS
// ============================================================================

#[test]
fn test_portion_size_scaling() {
    common::init_test_logging();
    let large = estimate_macros("large grilled chicken");
    let regular = estimate_macros("grilled chicken");
    let small = estimate_macros("small grilled chicken");

    assert!(large.calories > regular.calories);
    assert!(regular.calories > small.calories);
}

#[test]
fn test_result_macros_match_estimator() {
    let (kb, config) = common::builtin_engine();
    let description = "big turkey sandwich with an apple";
    let result = analyze_meal(&MealAnalysisParams::new(description), &kb, &config);
    assert_eq!(
        result.macro_estimate,
        macro_estimator::estimate(description, &config.macros)
    );
}

// ============================================================================
// DETERMINISM TESTS
// ============================================================================

#[test]
fn test_repeated_calls_are_byte_identical() {
    common::init_test_logging();
    let first = analyze_food_quality(
        "salmon with brown rice and broccoli",
        Some(MealTiming::PostGame),
        Some(16),
        None,
    );
    let second = analyze_food_quality(
        "salmon with brown rice and broccoli",
        Some(MealTiming::PostGame),
        Some(16),
        None,
    );
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_batch_preserves_order_and_matches_single_calls() {
    let (kb, config) = common::builtin_engine();
    let meals: Vec<MealAnalysisParams> = DESCRIPTIONS
        .iter()
        .cycle()
        .take(200)
        .enumerate()
        .map(|(i, description)| {
            let params = MealAnalysisParams::new(*description).with_age(10 + (i as u32 % 15));
            if i % 3 == 0 {
                params.with_timing(MealTiming::PreGame)
            } else {
                params
            }
        })
        .collect();

    let batch = analyze_meals_batch(&meals, &kb, &config);
    assert_eq!(batch.len(), meals.len());
    for (params, result) in meals.iter().zip(&batch) {
        assert_eq!(result, &analyze_meal(params, &kb, &config));
    }
}

#[test]
fn test_result_serializes_with_camel_case_fields() {
    let (kb, config) = common::builtin_engine();
    let result = analyze_meal(
        &MealAnalysisParams::new("oatmeal").with_timing(MealTiming::Regular),
        &kb,
        &config,
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["quality"], "excellent");
    assert_eq!(json["timingScore"], 100);
    assert!(json["macroEstimate"]["calories"].is_u64());
    assert_eq!(json["knowledgeBaseVersion"], kb.version());
}
