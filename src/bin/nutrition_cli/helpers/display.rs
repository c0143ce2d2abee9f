// ABOUTME: Output formatting helpers for nutrition-cli
// ABOUTME: Pretty JSON on stdout for results, JSON error responses on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use junior_nutrition::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(e.to_string()).with_source(e))?;
    println!("{rendered}");
    Ok(())
}

/// Print an error as a JSON error response on stderr
pub fn print_error(error: AppError) {
    let display = error.to_string();
    let response = ErrorResponse::from(error);
    let rendered = serde_json::to_string_pretty(&response).unwrap_or(display);
    eprintln!("{rendered}");
}
