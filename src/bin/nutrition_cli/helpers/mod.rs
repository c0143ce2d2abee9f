// ABOUTME: Helper modules for nutrition-cli
// ABOUTME: Output formatting shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
