// ABOUTME: Integration tests for loading alternative knowledge bases from JSON files
// ABOUTME: Covers normalisation, duplicate and blank keyword rejection, and version stamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use junior_nutrition::{
    analyze_meal, AppError, ConfigError, ErrorCode, KnowledgeBase, MealAnalysisParams, QualityTier,
    ScoringConfig,
};
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

mod common;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// LOADING TESTS
// ============================================================================

#[test]
fn test_load_from_path_normalises_keywords() {
    common::init_test_logging();
    let file = write_temp(common::SMALL_KNOWLEDGE_BASE_JSON);

    let kb = KnowledgeBase::from_path(file.path()).unwrap();
    assert_eq!(kb.version(), "test-1");
    assert_eq!(kb.lookup_category("kale"), Some(QualityTier::Excellent));
    assert_eq!(kb.lookup_category("LENTILS"), Some(QualityTier::Excellent));
    assert_eq!(kb.all_keywords().len(), 5);
    assert_eq!(kb.categories().len(), 4);
}

#[test]
fn test_loaded_knowledge_base_drives_scoring() {
    let file = write_temp(common::SMALL_KNOWLEDGE_BASE_JSON);
    let kb = KnowledgeBase::from_path(file.path()).unwrap();
    let config = ScoringConfig::default();

    let result = analyze_meal(&MealAnalysisParams::new("Kale and lentils"), &kb, &config);
    assert_eq!(result.identified_foods, vec!["kale", "lentils"]);
    assert_eq!(result.score, 100);
    assert_eq!(result.knowledge_base_version, "test-1");

    // Built-in keywords are unknown to this knowledge base
    let result = analyze_meal(&MealAnalysisParams::new("pizza"), &kb, &config);
    assert!(result.identified_foods.is_empty());
    assert_eq!(result.score, 50);
}

#[test]
fn test_duplicate_keyword_rejected_on_load() {
    let file = write_temp(
        r#"{
            "version": "dup",
            "categories": [
                { "tier": "good", "description": "a", "keywords": ["rice"] },
                { "tier": "fair", "description": "b", "keywords": ["Rice"] }
            ]
        }"#,
    );

    let err = KnowledgeBase::from_path(file.path()).unwrap_err();
    match err {
        ConfigError::DuplicateKeyword {
            keyword,
            first,
            second,
        } => {
            assert_eq!(keyword, "rice");
            assert_eq!(first, QualityTier::Good);
            assert_eq!(second, QualityTier::Fair);
        }
        other => panic!("expected duplicate keyword error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_within_one_tier_rejected() {
    let err = KnowledgeBase::from_json(
        r#"{"version":"v","categories":[{"tier":"poor","description":"x","keywords":["soda","soda"]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateKeyword { .. }));
}

#[test]
fn test_blank_keyword_and_missing_version_rejected() {
    let err = KnowledgeBase::from_json(
        r#"{"version":"v","categories":[{"tier":"good","description":"x","keywords":[""]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::EmptyKeyword(QualityTier::Good)));

    let err = KnowledgeBase::from_json(r#"{"version":" ","categories":[]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField("version")));
}

#[test]
fn test_unknown_tier_is_json_error() {
    let err = KnowledgeBase::from_json(
        r#"{"version":"v","categories":[{"tier":"stellar","description":"x","keywords":["a"]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_missing_file_maps_to_resource_not_found() {
    let dir = TempDir::new().unwrap();
    let err = KnowledgeBase::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_exported_builtin_reloads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("builtin.json");
    let builtin = KnowledgeBase::builtin();
    fs::write(
        &path,
        serde_json::to_string_pretty(&builtin.to_document()).unwrap(),
    )
    .unwrap();

    let reloaded = KnowledgeBase::from_path(&path).unwrap();
    assert_eq!(reloaded.version(), builtin.version());
    assert_eq!(reloaded.search("rice"), builtin.search("rice"));
}
