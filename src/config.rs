// ABOUTME: Engine configuration with typed sub-configs, validation, and env overrides
// ABOUTME: Holds BMR formula coefficients, BMI thresholds, and daily-requirement parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Engine Configuration
//!
//! Provides type-safe configuration for the calculation modules. Defaults
//! carry the canonical formula constants; deployments may override a small
//! set of values through `NUTRIGUIDE_*` environment variables.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export NUTRIGUIDE_BMI_NORMAL_MAX=25.0
//!    export NUTRIGUIDE_WEIGHT_LOSS_ADJUSTMENT_KCAL=-300
//!    ```
//!
//! 2. Default values (if env vars not set)

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Percentage weights do not sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Root configuration for the intelligence engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR formula coefficient rows
    pub bmr: BmrConfig,
    /// BMI classification thresholds
    pub bmi: BmiThresholds,
    /// Daily requirement calculation parameters
    pub requirements: RequirementsConfig,
}

/// BMR (Basal Metabolic Rate) formula coefficients
///
/// Two formula rows are carried: Harris-Benedict (used for the profile
/// metrics surface) and Mifflin-St Jeor (used for daily calorie
/// requirements, matching the original backend). Both are two-way branches;
/// callers fold `Gender::Other` into the female row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Harris-Benedict male base constant (88.362)
    pub hb_male_base: f64,
    /// Harris-Benedict male weight coefficient (13.397)
    pub hb_male_weight_coef: f64,
    /// Harris-Benedict male height coefficient (4.799)
    pub hb_male_height_coef: f64,
    /// Harris-Benedict male age coefficient (-5.677)
    pub hb_male_age_coef: f64,
    /// Harris-Benedict female base constant (447.593)
    pub hb_female_base: f64,
    /// Harris-Benedict female weight coefficient (9.247)
    pub hb_female_weight_coef: f64,
    /// Harris-Benedict female height coefficient (3.098)
    pub hb_female_height_coef: f64,
    /// Harris-Benedict female age coefficient (-4.330)
    pub hb_female_age_coef: f64,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// BMI classification thresholds (half-open intervals)
///
/// A value equal to a threshold belongs to the higher category: 18.5 is
/// Normal, 25 is Overweight, 30 is Obese.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Upper bound of the Underweight band (exclusive): 18.5
    pub underweight_max: f64,
    /// Upper bound of the Normal band (exclusive): 25.0
    pub normal_max: f64,
    /// Upper bound of the Overweight band (exclusive): 30.0
    pub overweight_max: f64,
}

/// Daily requirement calculation parameters
///
/// Calorie adjustments are applied to the Mifflin-St Jeor BMR per health
/// goal; the macro split divides the adjusted calories at 4/9/4 kcal per
/// gram of protein/fat/carbohydrate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// Calorie adjustment for a weight-loss goal (kcal): -300
    pub weight_loss_adjustment_kcal: f64,
    /// Calorie adjustment for a muscle-gain goal (kcal): +300
    pub muscle_gain_adjustment_kcal: f64,
    /// Protein share of daily calories (percent): 30
    pub protein_percent: f64,
    /// Fat share of daily calories (percent): 25
    pub fat_percent: f64,
    /// Carbohydrate share of daily calories (percent): 45
    pub carbs_percent: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            hb_male_base: 88.362,
            hb_male_weight_coef: 13.397,
            hb_male_height_coef: 4.799,
            hb_male_age_coef: -5.677,
            hb_female_base: 447.593,
            hb_female_weight_coef: 9.247,
            hb_female_height_coef: 3.098,
            hb_female_age_coef: -4.330,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_max: 18.5,
            normal_max: 25.0,
            overweight_max: 30.0,
        }
    }
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            weight_loss_adjustment_kcal: -300.0,
            muscle_gain_adjustment_kcal: 300.0,
            protein_percent: 30.0,
            fat_percent: 25.0,
            carbs_percent: 45.0,
        }
    }
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid
    /// value or the final configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if BMI thresholds are not strictly ascending and
    /// positive, or if the macro split does not sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmi.underweight_max <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "underweight_max must be positive",
            ));
        }

        if self.bmi.underweight_max >= self.bmi.normal_max
            || self.bmi.normal_max >= self.bmi.overweight_max
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be strictly ascending",
            ));
        }

        let split_sum = self.requirements.protein_percent
            + self.requirements.fat_percent
            + self.requirements.carbs_percent;

        if (split_sum - 100.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(
                "Macro split percentages must sum to 100",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("NUTRIGUIDE_BMI_UNDERWEIGHT_MAX") {
            self.bmi.underweight_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIGUIDE_BMI_UNDERWEIGHT_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIGUIDE_BMI_NORMAL_MAX") {
            self.bmi.normal_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIGUIDE_BMI_NORMAL_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIGUIDE_BMI_OVERWEIGHT_MAX") {
            self.bmi.overweight_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIGUIDE_BMI_OVERWEIGHT_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIGUIDE_WEIGHT_LOSS_ADJUSTMENT_KCAL") {
            self.requirements.weight_loss_adjustment_kcal = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRIGUIDE_WEIGHT_LOSS_ADJUSTMENT_KCAL".into())
            })?;
        }

        if let Ok(val) = std::env::var("NUTRIGUIDE_MUSCLE_GAIN_ADJUSTMENT_KCAL") {
            self.requirements.muscle_gain_adjustment_kcal = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid NUTRIGUIDE_MUSCLE_GAIN_ADJUSTMENT_KCAL".into())
            })?;
        }

        Ok(self)
    }
}
