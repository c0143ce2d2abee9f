// ABOUTME: Nutrition CLI - command-line front end for the meal-quality scoring engine
// ABOUTME: Analyzes meals, classifies meal timing, scores a logged day, and browses keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score a meal
//! nutrition-cli analyze "grilled chicken with rice"
//!
//! # Score a lunch eaten at noon for a 14 year old
//! nutrition-cli analyze "pasta with chicken" --slot LUNCH --time 12:00 --age 14
//!
//! # Classify a meal slot and time
//! nutrition-cli timing DINNER 19:00
//!
//! # Score a day of logged meals
//! nutrition-cli daily meals.json
//!
//! # Search the knowledge base
//! nutrition-cli keywords --search chicken
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use junior_nutrition::logging::LoggingConfig;
use junior_nutrition::{AgeGroup, AppResult, MealSlot, MealTiming};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Junior athlete meal scoring CLI",
    long_about = "Scores free-text meal descriptions, classifies meal timing, and aggregates daily nutrition scores.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one meal description
    Analyze {
        /// Free-text meal description
        description: String,

        /// Meal slot (BREAKFAST, SNACK, LUNCH, DINNER, EVENING_SNACK, AFTER_PRACTICE)
        #[arg(long, requires = "time")]
        slot: Option<MealSlot>,

        /// Meal time as HH:MM, used with --slot
        #[arg(long, requires = "slot")]
        time: Option<String>,

        /// Timing context (pre-game, post-game, after-practice, regular); overrides --slot/--time
        #[arg(long)]
        timing: Option<MealTiming>,

        /// Player age in years
        #[arg(long)]
        age: Option<u32>,

        /// Age group (10-12, 13-15, 16-18, 19-25); overrides --age
        #[arg(long)]
        age_group: Option<AgeGroup>,
    },

    /// Classify a meal slot and time into a timing context
    Timing {
        /// Meal slot
        slot: MealSlot,

        /// Meal time as HH:MM
        time: String,
    },

    /// Score a day of logged meals from a JSON file
    Daily {
        /// JSON array of logged meals, each with a "quality" field
        file: PathBuf,
    },

    /// List knowledge-base keywords
    Keywords {
        /// Only show keywords containing this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            helpers::display::print_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Analyze {
            description,
            slot,
            time,
            timing,
            age,
            age_group,
        } => {
            let timing = timing.or_else(|| {
                slot.zip(time.as_deref())
                    .map(|(slot, time)| junior_nutrition::classify_timing(slot, time))
            });
            debug!(?timing, "Resolved timing context");
            commands::analyze::run(description, timing, age, age_group)
        }
        Command::Timing { slot, time } => commands::timing::run(slot, &time),
        Command::Daily { file } => commands::daily::run(&file),
        Command::Keywords { search } => commands::keywords::run(search.as_deref()),
    }
}
