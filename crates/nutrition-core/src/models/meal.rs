// ABOUTME: Closed classification enums for meals: quality tier, slot, timing context, age group
// ABOUTME: Every derivation into these enums is total so no input is left unclassified
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score at or above which a meal is rated excellent
pub const EXCELLENT_THRESHOLD: u8 = 85;
/// Score at or above which a meal is rated good
pub const GOOD_THRESHOLD: u8 = 70;
/// Score at or above which a meal is rated fair
pub const FAIR_THRESHOLD: u8 = 50;

/// Overall healthfulness bucket of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Mostly processed, fried, or sugary food
    Poor,
    /// Acceptable but missing key food groups
    Fair,
    /// Solid meal with room for improvement
    Good,
    /// Whole foods, lean protein, vegetables
    Excellent,
}

impl QualityTier {
    /// All tiers, best first. Knowledge-base iteration follows this order.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    /// Derive the tier from a final 0-100 score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Wire spelling of this tier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Parse a tier, returning `None` for anything unrecognised
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Some(Self::Poor),
            "fair" => Some(Self::Fair),
            "good" => Some(Self::Good),
            "excellent" => Some(Self::Excellent),
            _ => None,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_lossy(s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown quality tier: {s}")))
    }
}

/// Meal slot chosen by the player when logging food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Daytime snack
    Snack,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snack after dinner
    EveningSnack,
    /// Food eaten right after a practice session
    AfterPractice,
}

impl MealSlot {
    /// Wire spelling of this slot
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Snack => "SNACK",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::EveningSnack => "EVENING_SNACK",
            Self::AfterPractice => "AFTER_PRACTICE",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "BREAKFAST" => Ok(Self::Breakfast),
            "SNACK" => Ok(Self::Snack),
            "LUNCH" => Ok(Self::Lunch),
            "DINNER" => Ok(Self::Dinner),
            "EVENING_SNACK" => Ok(Self::EveningSnack),
            "AFTER_PRACTICE" => Ok(Self::AfterPractice),
            _ => Err(AppError::invalid_input(format!("unknown meal slot: {s}"))),
        }
    }
}

/// Meal context relative to athletic activity
///
/// Derived from a [`MealSlot`] and a clock time; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealTiming {
    /// Meal expected to precede a match
    PreGame,
    /// Meal expected to follow a match
    PostGame,
    /// Recovery food after practice
    AfterPractice,
    /// No activity context
    Regular,
}

impl MealTiming {
    /// Wire spelling of this timing
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PreGame => "pre-game",
            Self::PostGame => "post-game",
            Self::AfterPractice => "after-practice",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for MealTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTiming {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "pre-game" => Ok(Self::PreGame),
            "post-game" => Ok(Self::PostGame),
            "after-practice" => Ok(Self::AfterPractice),
            "regular" => Ok(Self::Regular),
            _ => Err(AppError::invalid_input(format!("unknown meal timing: {s}"))),
        }
    }
}

/// Coarse player age bucket used to adjust scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Ages 12 and under
    #[serde(rename = "10-12")]
    Preteen,
    /// Ages 13 to 15
    #[serde(rename = "13-15")]
    EarlyTeen,
    /// Ages 16 to 18
    #[serde(rename = "16-18")]
    LateTeen,
    /// Ages 19 and over
    #[serde(rename = "19-25")]
    YoungAdult,
}

impl AgeGroup {
    /// Bucket an integer age. Total: ages below 10 land in the youngest group
    /// and ages above 25 in the oldest.
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=12 => Self::Preteen,
            13..=15 => Self::EarlyTeen,
            16..=18 => Self::LateTeen,
            _ => Self::YoungAdult,
        }
    }

    /// Wire spelling of this age group
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preteen => "10-12",
            Self::EarlyTeen => "13-15",
            Self::LateTeen => "16-18",
            Self::YoungAdult => "19-25",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "10-12" => Ok(Self::Preteen),
            "13-15" => Ok(Self::EarlyTeen),
            "16-18" => Ok(Self::LateTeen),
            "19-25" => Ok(Self::YoungAdult),
            _ => Err(AppError::invalid_input(format!("unknown age group: {s}"))),
        }
    }
}
