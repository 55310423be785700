// ABOUTME: Daily nutrient requirement calculations from biometrics and health goal
// ABOUTME: Mifflin-St Jeor BMR, goal-based calorie adjustment, and fixed macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Daily Requirements Calculator
//!
//! Computes daily calorie and macronutrient targets from biometrics and the
//! selected health goal.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{BmrConfig, RequirementsConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, HealthGoal};
use serde::{Deserialize, Serialize};

/// Energy density of protein (kcal per gram)
const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Energy density of fat (kcal per gram)
const FAT_KCAL_PER_G: f64 = 9.0;
/// Energy density of carbohydrate (kcal per gram)
const CARBS_KCAL_PER_G: f64 = 4.0;

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRequirements {
    /// Basal Metabolic Rate (kcal/day, Mifflin-St Jeor)
    pub bmr: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: `BMR = 10·weight + 6.25·height - 5·age + gender_constant`
/// - Male: +5
/// - Non-male: -161 (`Gender::Other` follows the female row, see
///   [`Gender`])
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Gender selecting the constant
/// * `config` - BMR configuration with formula coefficients
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    Ok(config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + gender_constant)
}

/// Calculate complete daily requirements for a profile
///
/// Steps:
/// 1. Mifflin-St Jeor BMR.
/// 2. Goal adjustment: weight loss subtracts, muscle gain adds, maintenance
///    leaves the BMR unchanged.
/// 3. Macro split over the adjusted calories (30% protein / 25% fat / 45%
///    carbohydrate by default) at 4/9/4 kcal per gram.
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_daily_requirements(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    goal: HealthGoal,
    bmr_config: &BmrConfig,
    config: &RequirementsConfig,
) -> AppResult<DailyRequirements> {
    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, bmr_config)?;

    let calories = match goal {
        HealthGoal::WeightLoss => bmr + config.weight_loss_adjustment_kcal,
        HealthGoal::MuscleGain => bmr + config.muscle_gain_adjustment_kcal,
        HealthGoal::Maintenance => bmr,
    };

    Ok(DailyRequirements {
        bmr,
        calories,
        protein_g: calories * config.protein_percent / 100.0 / PROTEIN_KCAL_PER_G,
        fat_g: calories * config.fat_percent / 100.0 / FAT_KCAL_PER_G,
        carbs_g: calories * config.carbs_percent / 100.0 / CARBS_KCAL_PER_G,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_mifflin_st_jeor_male() {
        let config = &EngineConfig::global().bmr;

        // 10 * 70 + 6.25 * 170 - 5 * 30 + 5 = 700 + 1062.5 - 150 + 5 = 1617.5
        let bmr = calculate_mifflin_st_jeor(70.0, 170.0, 30, Gender::Male, config).unwrap();
        assert!((bmr - 1617.5).abs() < 0.01);
    }

    #[test]
    fn test_mifflin_st_jeor_other_follows_female_row() {
        let config = &EngineConfig::global().bmr;

        let female =
            calculate_mifflin_st_jeor(60.0, 160.0, 30, Gender::Female, config).unwrap();
        let other = calculate_mifflin_st_jeor(60.0, 160.0, 30, Gender::Other, config).unwrap();

        // 10 * 60 + 6.25 * 160 - 5 * 30 - 161 = 600 + 1000 - 150 - 161 = 1289
        assert!((female - 1289.0).abs() < 0.01);
        assert!((female - other).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_adjustments() {
        let config = EngineConfig::global();

        let loss = calculate_daily_requirements(
            70.0,
            170.0,
            30,
            Gender::Male,
            HealthGoal::WeightLoss,
            &config.bmr,
            &config.requirements,
        )
        .unwrap();
        let maintain = calculate_daily_requirements(
            70.0,
            170.0,
            30,
            Gender::Male,
            HealthGoal::Maintenance,
            &config.bmr,
            &config.requirements,
        )
        .unwrap();

        assert!((maintain.calories - loss.calories - 300.0).abs() < 0.01);
        assert!((maintain.calories - maintain.bmr).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_split_follows_percentages() {
        let config = EngineConfig::global();

        let needs = calculate_daily_requirements(
            70.0,
            170.0,
            30,
            Gender::Male,
            HealthGoal::Maintenance,
            &config.bmr,
            &config.requirements,
        )
        .unwrap();

        // calories = 1617.5: protein = 1617.5 * 0.30 / 4, fat = 1617.5 * 0.25 / 9,
        // carbs = 1617.5 * 0.45 / 4
        assert!((needs.protein_g - 121.3125).abs() < 0.01);
        assert!((needs.fat_g - 44.930_555).abs() < 0.01);
        assert!((needs.carbs_g - 181.968_75).abs() < 0.01);
    }

    #[test]
    fn test_rejects_non_positive_biometrics() {
        let config = &EngineConfig::global().bmr;

        assert!(calculate_mifflin_st_jeor(0.0, 170.0, 30, Gender::Male, config).is_err());
        assert!(calculate_mifflin_st_jeor(70.0, 0.0, 30, Gender::Male, config).is_err());
    }
}
