// ABOUTME: Static goal-to-meals catalog with lenient goal lookup
// ABOUTME: Maps each health goal to a fixed ordered list of three meal names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Meal Suggestion Selector
//!
//! A fixed catalog, not a computation: each goal maps to exactly three meal
//! names in stable order, so suggestion output is deterministic across
//! calls. Unknown goal strings degrade silently to the Maintenance list
//! (see [`HealthGoal::from_str_lossy`]); the selector never raises an error
//! for goal lookup.

use crate::models::HealthGoal;

/// Number of meals suggested per goal
pub const MEALS_PER_GOAL: usize = 3;

const WEIGHT_LOSS_MEALS: [&str; MEALS_PER_GOAL] = [
    "🥗 Greek Salad with Grilled Chicken",
    "🍎 Apple with Almond Butter",
    "🥙 Veggie Wrap with Hummus",
];

const MUSCLE_GAIN_MEALS: [&str; MEALS_PER_GOAL] = [
    "🍗 Grilled Chicken Breast with Quinoa",
    "🥚 Scrambled Eggs with Avocado",
    "🥛 Protein Smoothie Bowl",
];

const MAINTENANCE_MEALS: [&str; MEALS_PER_GOAL] = [
    "🍛 Balanced Rice Bowl with Vegetables",
    "🥪 Whole Grain Sandwich",
    "🍲 Lentil Soup with Bread",
];

/// Get the suggested meals for a health goal
///
/// Returns exactly three meal names in stable order. The mapping is an
/// immutable compile-time table; exhaustiveness over [`HealthGoal`] is
/// checked by the match.
#[must_use]
pub const fn meals_for_goal(goal: HealthGoal) -> [&'static str; MEALS_PER_GOAL] {
    match goal {
        HealthGoal::WeightLoss => WEIGHT_LOSS_MEALS,
        HealthGoal::MuscleGain => MUSCLE_GAIN_MEALS,
        HealthGoal::Maintenance => MAINTENANCE_MEALS,
    }
}

/// Get the suggested meals for a free-form goal string
///
/// Unrecognized goals resolve to the Maintenance list rather than failing.
#[must_use]
pub fn meals_for_goal_name(goal: &str) -> [&'static str; MEALS_PER_GOAL] {
    meals_for_goal(HealthGoal::from_str_lossy(goal))
}
