// ABOUTME: Scoring configuration for meal quality analysis and daily aggregation
// ABOUTME: Tier weights, timing multipliers, age adjustments, macro heuristics, and daily weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Scoring Configuration
//!
//! Every number the pipeline uses lives here with its production default.
//! Configuration is loaded once per process: defaults, then `NUTRITION_*`
//! environment overrides, then validation. A configuration that fails to
//! load is logged and replaced by the defaults, so scoring never stops.

use super::error::ConfigError;
use nutrition_core::QualityTier;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Main scoring configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points contributed by each matched keyword's tier
    pub tier_weights: TierWeightsConfig,
    /// Base score when no keyword matches (unrecognised meals are "fair")
    pub neutral_base_score: f64,
    /// Timing-based multipliers, as percentages
    pub timing: TimingAdjustmentConfig,
    /// Age-group scaling and flat bonuses
    pub age: AgeAdjustmentConfig,
    /// Macro estimate base values, family increments, and portion multipliers
    pub macros: MacroEstimateConfig,
    /// Coaching suggestion limits
    pub suggestions: SuggestionConfig,
    /// Daily aggregation settings
    pub daily: DailyScoreConfig,
}

/// Per-tier keyword weights, also used as per-entry daily quality points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierWeightsConfig {
    /// Excellent keyword weight: 100
    pub excellent: f64,
    /// Good keyword weight: 75
    pub good: f64,
    /// Fair keyword weight: 50
    pub fair: f64,
    /// Poor keyword weight: 25
    pub poor: f64,
}

impl TierWeightsConfig {
    /// Weight for a tier
    #[must_use]
    pub const fn weight_for(&self, tier: QualityTier) -> f64 {
        match tier {
            QualityTier::Excellent => self.excellent,
            QualityTier::Good => self.good,
            QualityTier::Fair => self.fair,
            QualityTier::Poor => self.poor,
        }
    }
}

impl Default for TierWeightsConfig {
    fn default() -> Self {
        Self {
            excellent: 100.0,
            good: 75.0,
            fair: 50.0,
            poor: 25.0,
        }
    }
}

/// Timing multipliers applied to the base score (100 = no effect)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingAdjustmentConfig {
    /// Multiplier when no timing rule fires
    pub default_multiplier: u32,
    /// Pre-game meal with pasta, rice, or bread
    pub pre_game_carb_multiplier: u32,
    /// Pre-game meal that is heavy, fried, or creamy
    pub pre_game_heavy_multiplier: u32,
    /// Post-game meal with protein, a shake, or milk
    pub post_game_recovery_multiplier: u32,
    /// Post-game meal with water or fruit
    pub post_game_hydration_multiplier: u32,
}

impl Default for TimingAdjustmentConfig {
    fn default() -> Self {
        Self {
            default_multiplier: 100,
            pre_game_carb_multiplier: 120,
            pre_game_heavy_multiplier: 60,
            post_game_recovery_multiplier: 120,
            post_game_hydration_multiplier: 110,
        }
    }
}

/// Age-group scaling factors and flat bonus points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeAdjustmentConfig {
    /// Base-score scale for ages 10-12 (more forgiving)
    pub preteen_scale: f64,
    /// Bonus for dairy in a 10-12 meal
    pub preteen_dairy_bonus: u32,
    /// Bonus for protein in a 13-15 meal
    pub early_teen_protein_bonus: u32,
    /// Bonus for lean/grilled/whole food in a 16-18 meal
    pub late_teen_lean_bonus: u32,
    /// Base-score scale for ages 19-25 (stricter)
    pub young_adult_scale: f64,
}

impl Default for AgeAdjustmentConfig {
    fn default() -> Self {
        Self {
            preteen_scale: 1.10,
            preteen_dairy_bonus: 15,
            early_teen_protein_bonus: 10,
            late_teen_lean_bonus: 10,
            young_adult_scale: 0.95,
        }
    }
}

/// Additive macro contribution of one keyword family
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MacroContribution {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fats: f64,
}

impl MacroContribution {
    /// Create a contribution
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

/// Macro estimation heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroEstimateConfig {
    /// Starting values before any family is detected
    pub base: MacroContribution,
    /// Meat, fish, eggs, tofu
    pub protein_source: MacroContribution,
    /// Rice, pasta, bread, potatoes
    pub starch_source: MacroContribution,
    /// Oils, butter, cheese, nuts
    pub fat_source: MacroContribution,
    /// Any vegetables
    pub vegetables: MacroContribution,
    /// Any fruit
    pub fruit: MacroContribution,
    /// Shakes and smoothies
    pub shake: MacroContribution,
    /// Multiplier for "large"/"big" portions
    pub large_portion_multiplier: f64,
    /// Multiplier for "small"/"little" portions
    pub small_portion_multiplier: f64,
}

impl Default for MacroEstimateConfig {
    fn default() -> Self {
        Self {
            base: MacroContribution::new(300.0, 10.0, 30.0, 10.0),
            protein_source: MacroContribution::new(150.0, 25.0, 0.0, 0.0),
            starch_source: MacroContribution::new(160.0, 0.0, 40.0, 0.0),
            fat_source: MacroContribution::new(135.0, 0.0, 0.0, 15.0),
            vegetables: MacroContribution::new(50.0, 0.0, 10.0, 0.0),
            fruit: MacroContribution::new(80.0, 0.0, 20.0, 0.0),
            shake: MacroContribution::new(200.0, 20.0, 30.0, 0.0),
            large_portion_multiplier: 1.3,
            small_portion_multiplier: 0.7,
        }
    }
}

/// Coaching suggestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned per meal
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self { max_suggestions: 3 }
    }
}

/// Daily nutrition score settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyScoreConfig {
    /// Meals a player is expected to log per day
    pub expected_meals_per_day: u32,
    /// Weight of meal frequency in the total score
    pub frequency_weight: f64,
    /// Weight of average food quality in the total score
    pub quality_weight: f64,
}

impl Default for DailyScoreConfig {
    fn default() -> Self {
        Self {
            expected_meals_per_day: 5,
            frequency_weight: 0.4,
            quality_weight: 0.6,
        }
    }
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        info!(
            neutral_base_score = config.neutral_base_score,
            expected_meals_per_day = config.daily.expected_meals_per_day,
            max_suggestions = config.suggestions.max_suggestions,
            "Scoring configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison below, so reject it up front
        if !self.all_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "configuration values must be finite numbers",
            ));
        }

        let w = &self.tier_weights;
        if !(w.excellent > w.good && w.good > w.fair && w.fair > w.poor) {
            return Err(ConfigError::InvalidRange(
                "tier weights must be strictly descending: excellent > good > fair > poor",
            ));
        }
        if w.poor < 0.0 || w.excellent > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "tier weights must lie within 0-100",
            ));
        }
        if !(0.0..=100.0).contains(&self.neutral_base_score) {
            return Err(ConfigError::ValueOutOfRange(
                "neutral_base_score must lie within 0-100",
            ));
        }

        let t = &self.timing;
        if [
            t.default_multiplier,
            t.pre_game_carb_multiplier,
            t.pre_game_heavy_multiplier,
            t.post_game_recovery_multiplier,
            t.post_game_hydration_multiplier,
        ]
        .contains(&0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "timing multipliers must be positive",
            ));
        }

        if self.age.preteen_scale <= 0.0 || self.age.young_adult_scale <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "age scaling factors must be positive",
            ));
        }

        let m = &self.macros;
        if m.large_portion_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "large_portion_multiplier must be at least 1.0",
            ));
        }
        if m.small_portion_multiplier <= 0.0 || m.small_portion_multiplier > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "small_portion_multiplier must be within (0, 1]",
            ));
        }

        if self.suggestions.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_suggestions must be at least 1",
            ));
        }

        let d = &self.daily;
        if d.expected_meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "expected_meals_per_day must be at least 1",
            ));
        }
        if d.frequency_weight < 0.0 || d.quality_weight < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "daily weights must not be negative",
            ));
        }
        if (d.frequency_weight + d.quality_weight - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "daily frequency and quality weights must sum to 1.0",
            ));
        }

        Ok(())
    }

    fn all_finite(&self) -> bool {
        let w = &self.tier_weights;
        let m = &self.macros;
        let contributions = [
            m.base,
            m.protein_source,
            m.starch_source,
            m.fat_source,
            m.vegetables,
            m.fruit,
            m.shake,
        ];

        [
            w.excellent,
            w.good,
            w.fair,
            w.poor,
            self.neutral_base_score,
            self.age.preteen_scale,
            self.age.young_adult_scale,
            m.large_portion_multiplier,
            m.small_portion_multiplier,
            self.daily.frequency_weight,
            self.daily.quality_weight,
        ]
        .into_iter()
        .chain(
            contributions
                .iter()
                .flat_map(|c| [c.calories, c.protein, c.carbs, c.fats]),
        )
        .all(f64::is_finite)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Tier weights
        Self::apply_env_var(
            "NUTRITION_WEIGHT_EXCELLENT",
            &mut self.tier_weights.excellent,
        )?;
        Self::apply_env_var("NUTRITION_WEIGHT_GOOD", &mut self.tier_weights.good)?;
        Self::apply_env_var("NUTRITION_WEIGHT_FAIR", &mut self.tier_weights.fair)?;
        Self::apply_env_var("NUTRITION_WEIGHT_POOR", &mut self.tier_weights.poor)?;
        Self::apply_env_var(
            "NUTRITION_NEUTRAL_BASE_SCORE",
            &mut self.neutral_base_score,
        )?;

        // Timing multipliers
        Self::apply_env_var(
            "NUTRITION_PRE_GAME_CARB_MULTIPLIER",
            &mut self.timing.pre_game_carb_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRITION_PRE_GAME_HEAVY_MULTIPLIER",
            &mut self.timing.pre_game_heavy_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRITION_POST_GAME_RECOVERY_MULTIPLIER",
            &mut self.timing.post_game_recovery_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRITION_POST_GAME_HYDRATION_MULTIPLIER",
            &mut self.timing.post_game_hydration_multiplier,
        )?;

        // Age adjustments
        Self::apply_env_var("NUTRITION_PRETEEN_SCALE", &mut self.age.preteen_scale)?;
        Self::apply_env_var(
            "NUTRITION_YOUNG_ADULT_SCALE",
            &mut self.age.young_adult_scale,
        )?;

        // Suggestions and daily aggregation
        Self::apply_env_var(
            "NUTRITION_MAX_SUGGESTIONS",
            &mut self.suggestions.max_suggestions,
        )?;
        Self::apply_env_var(
            "NUTRITION_EXPECTED_MEALS_PER_DAY",
            &mut self.daily.expected_meals_per_day,
        )?;
        Self::apply_env_var(
            "NUTRITION_DAILY_FREQUENCY_WEIGHT",
            &mut self.daily.frequency_weight,
        )?;
        Self::apply_env_var(
            "NUTRITION_DAILY_QUALITY_WEIGHT",
            &mut self.daily.quality_weight,
        )?;

        Ok(self)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tier_weights: TierWeightsConfig::default(),
            neutral_base_score: 50.0,
            timing: TimingAdjustmentConfig::default(),
            age: AgeAdjustmentConfig::default(),
            macros: MacroEstimateConfig::default(),
            suggestions: SuggestionConfig::default(),
            daily: DailyScoreConfig::default(),
        }
    }
}
