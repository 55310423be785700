// ABOUTME: Shared domain models for profile submission and metric results
// ABOUTME: ProfileInput, Gender, HealthGoal, and MetricResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

use crate::anthropometrics::BmiCategory;
use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
///
/// Both BMR formulas in this engine are two-way branches: `Other` follows
/// the female coefficient row. This is an inherited modeling simplification
/// carried over for compatibility, not a biological default; it is stated
/// here and pinned by tests so callers are never surprised by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (male coefficient row)
    Male,
    /// Female (female coefficient row)
    Female,
    /// Other (follows the female coefficient row)
    Other,
}

impl Gender {
    /// Parse a gender from a free-form string
    ///
    /// Unrecognized values fold into `Other`, which in turn follows the
    /// female formula row.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// User-selected health objective driving meal selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Caloric deficit, lighter meals
    WeightLoss,
    /// Caloric surplus, protein-forward meals
    MuscleGain,
    /// Caloric balance, default goal
    Maintenance,
}

impl HealthGoal {
    /// Parse a health goal from a free-form string
    ///
    /// Accepts both display form ("Weight Loss") and snake form
    /// ("weight_loss"). Unknown goals degrade silently to `Maintenance`
    /// rather than failing; the selector never raises an error for goal
    /// lookup.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "maintenance" => Self::Maintenance,
            other => {
                tracing::debug!(goal = other, "unknown health goal, using maintenance");
                Self::Maintenance
            }
        }
    }
}

/// A validated profile submission
///
/// Created once per form submission and consumed once per calculation; the
/// caller validates presence and numeric form before constructing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Display name of the user
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender for BMR branch selection
    pub gender: Gender,
    /// Height in centimeters (must be positive)
    pub height_cm: f64,
    /// Weight in kilograms (must be positive)
    pub weight_kg: f64,
    /// Health goal driving meal selection
    pub health_goal: HealthGoal,
    /// Free-form food preference (e.g. "Vegetarian")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_preference: Option<String>,
    /// Comma-separated allergies, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

/// Derived metrics for a single profile submission
///
/// Recomputed on every submission; nothing here is cached or persisted by
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricResult {
    /// Body Mass Index
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day, Harris-Benedict)
    pub bmr: f64,
    /// Weight-status category for the BMI
    pub category: BmiCategory,
    /// Exactly three suggested meal names for the goal, in stable order
    pub suggested_meals: Vec<String>,
}
