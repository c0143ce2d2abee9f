// ABOUTME: Configuration error types for scoring configuration and knowledge-base validation
// ABOUTME: Defines error variants for invalid ranges, weights, parse failures, and duplicate keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for scoring configuration and knowledge-base validation.

use nutrition_core::{AppError, ErrorCode, QualityTier};
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., thresholds not descending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// The same keyword is listed under two tiers (or twice under one)
    #[error("Duplicate keyword '{keyword}' in {first} and {second}")]
    DuplicateKeyword {
        /// Normalised keyword
        keyword: String,
        /// Tier where the keyword was first seen
        first: QualityTier,
        /// Tier where it appeared again
        second: QualityTier,
    },

    /// A keyword is empty after trimming
    #[error("Empty keyword in {0} category")]
    EmptyKeyword(QualityTier),

    /// Knowledge-base file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Knowledge-base file is not valid JSON for the expected shape
    #[error("Invalid knowledge base document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::MissingField(_) => ErrorCode::ConfigMissing,
            ConfigError::Io(io_error) if io_error.kind() == io::ErrorKind::NotFound => {
                ErrorCode::ResourceNotFound
            }
            ConfigError::Io(_) => ErrorCode::StorageError,
            ConfigError::InvalidRange(_)
            | ConfigError::Parse(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_)
            | ConfigError::DuplicateKeyword { .. }
            | ConfigError::EmptyKeyword(_)
            | ConfigError::Json(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
