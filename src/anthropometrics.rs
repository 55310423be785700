// ABOUTME: Anthropometric calculations for body metrics
// ABOUTME: BMI, Harris-Benedict BMR, and weight-status classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Anthropometric Calculator
//!
//! Pure functions turning weight, height, age, and gender into BMI, BMR,
//! and a weight-status category. All operations are deterministic and free
//! of side effects; malformed numeric input is the only failure mode.
//!
//! # Scientific References
//!
//! - Harris, J.A., & Benedict, F.G. (1918). A biometric study of human
//!   basal metabolism. *PNAS*, 4(12), 370-373.
//!   <https://doi.org/10.1073/pnas.4.12.370>
//!   (revised coefficients)

use crate::config::{BmiThresholds, BmrConfig};
use crate::errors::{AppError, AppResult};
use crate::models::Gender;
use serde::{Deserialize, Serialize};

/// Weight-status category derived from BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Human-readable category name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Calculate Body Mass Index
///
/// Formula: `weight_kg / (height_cm / 100)^2`
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Formula, branching on gender:
/// - male: `88.362 + 13.397·weight + 4.799·height - 5.677·age`
/// - non-male: `447.593 + 9.247·weight + 3.098·height - 4.330·age`
///
/// This is a two-way branch: `Gender::Other` follows the female coefficient
/// row by policy (see [`Gender`]), not as a biological default.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Gender selecting the coefficient row
/// * `config` - BMR configuration with formula coefficients
///
/// # Errors
///
/// Returns an error if weight or height is not positive
pub fn calculate_harris_benedict(
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

    let age_f64 = f64::from(age);

    let bmr = match gender {
        Gender::Male => {
            config.hb_male_base
                + config.hb_male_weight_coef * weight_kg
                + config.hb_male_height_coef * height_cm
                + config.hb_male_age_coef * age_f64
        }
        Gender::Female | Gender::Other => {
            config.hb_female_base
                + config.hb_female_weight_coef * weight_kg
                + config.hb_female_height_coef * height_cm
                + config.hb_female_age_coef * age_f64
        }
    };

    Ok(bmr)
}

/// Classify a BMI value into a weight-status category
///
/// Half-open intervals: boundary values belong to the higher category
/// (18.5 is Normal, 25 is Overweight, 30 is Obese). Total over all inputs.
#[must_use]
pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholds) -> BmiCategory {
    if bmi < thresholds.underweight_max {
        BmiCategory::Underweight
    } else if bmi < thresholds.normal_max {
        BmiCategory::Normal
    } else if bmi < thresholds.overweight_max {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
