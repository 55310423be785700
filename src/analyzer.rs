// ABOUTME: Profile evaluation entry point composing the individual calculators
// ABOUTME: Turns a validated ProfileInput into a complete MetricResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Profile Analyzer
//!
//! The composition entry point for a profile submission: BMI, then
//! Harris-Benedict BMR, then weight-status classification, then the goal's
//! suggested meals, assembled into one [`MetricResult`].

use crate::anthropometrics::{calculate_bmi, calculate_harris_benedict, classify_bmi};
use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::meal_suggestions::meals_for_goal;
use crate::models::{MetricResult, ProfileInput};

/// Evaluate a profile submission into derived metrics and suggestions
///
/// Deterministic and stateless: identical inputs always produce identical
/// output, and nothing is cached between submissions.
///
/// # Errors
///
/// Returns an error if the profile's weight or height is not positive
pub fn evaluate_profile(profile: &ProfileInput, config: &EngineConfig) -> AppResult<MetricResult> {
    // Step 1: BMI from weight and height
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;

    // Step 2: Harris-Benedict BMR
    let bmr = calculate_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;

    // Step 3: weight-status category
    let category = classify_bmi(bmi, &config.bmi);

    // Step 4: goal-driven meal suggestions
    let suggested_meals = meals_for_goal(profile.health_goal)
        .iter()
        .map(|meal| (*meal).to_owned())
        .collect();

    tracing::debug!(
        goal = ?profile.health_goal,
        category = ?category,
        "profile evaluated"
    );

    Ok(MetricResult {
        bmi,
        bmr,
        category,
        suggested_meals,
    })
}
