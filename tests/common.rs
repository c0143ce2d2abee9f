// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet test logging and canned knowledge-base documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `junior_nutrition`

use junior_nutrition::{KnowledgeBase, ScoringConfig};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Built-in knowledge base and default scoring configuration
pub fn builtin_engine() -> (KnowledgeBase, ScoringConfig) {
    init_test_logging();
    (KnowledgeBase::builtin(), ScoringConfig::default())
}

/// A small valid knowledge-base document
pub const SMALL_KNOWLEDGE_BASE_JSON: &str = r#"{
    "version": "test-1",
    "categories": [
        { "tier": "excellent", "description": "whole foods", "keywords": ["Kale", " lentils "] },
        { "tier": "good", "description": "staples", "keywords": ["rice"] },
        { "tier": "fair", "description": "refined", "keywords": ["toast"] },
        { "tier": "poor", "description": "junk", "keywords": ["gummy bears"] }
    ]
}"#;
