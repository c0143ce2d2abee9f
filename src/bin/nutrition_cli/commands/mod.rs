// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: One module per subcommand: analyze, timing, daily, keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod daily;
pub mod keywords;
pub mod timing;
