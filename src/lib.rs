// ABOUTME: Library entry point for the NutriGuide intelligence engine
// ABOUTME: Deterministic health metrics, meal recommendations, and dashboard derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

#![deny(unsafe_code)]

//! # `NutriGuide` Intelligence Engine
//!
//! Deterministic, rule-based computations turning raw user inputs (age,
//! gender, height, weight, goal, meal name) into derived metrics,
//! categorizations, and generated text artifacts. The engine is consumed by
//! a presentation layer that supplies validated input and renders the
//! output; network transport, persistence, and rendering live outside this
//! crate.
//!
//! All operations are synchronous, pure, single-threaded computations with
//! no shared mutable state and no I/O, so they may be invoked concurrently
//! from independent calling contexts without coordination.
//!
//! ## Example
//!
//! ```rust
//! use nutriguide_intelligence::config::EngineConfig;
//! use nutriguide_intelligence::{calculate_bmi, classify_bmi, BmiCategory};
//!
//! let config = EngineConfig::global();
//! let bmi = calculate_bmi(70.0, 170.0)?;
//! assert_eq!(classify_bmi(bmi, &config.bmi), BmiCategory::Normal);
//! # Ok::<(), nutriguide_intelligence::AppError>(())
//! ```

/// Profile evaluation entry point composing the individual calculators
pub mod analyzer;

/// BMI, Harris-Benedict BMR, and weight-status classification
pub mod anthropometrics;

/// Engine configuration with validation and environment overrides
pub mod config;

/// Dashboard payload models and derived presentation metrics
pub mod dashboard;

/// Unified error handling for the engine boundary
pub mod errors;

/// Text normalization for meal-name display
pub mod formatting;

/// Nutrient record matching and allergen filtering
pub mod meal_records;

/// Static goal-to-meals suggestion catalog
pub mod meal_suggestions;

/// Ingredient and recipe synthesis from meal names
pub mod meal_synthesis;

/// Shared domain models for profile submission and results
pub mod models;

/// Daily calorie and macronutrient requirement calculations
pub mod nutrition_calculator;

pub use analyzer::evaluate_profile;
pub use anthropometrics::{
    calculate_bmi, calculate_harris_benedict, classify_bmi, BmiCategory,
};
pub use dashboard::{
    derive_dashboard_metrics, DashboardAggregate, DashboardDerived, GoalAchievement,
    WeightChangeDirection, WeightSample,
};
pub use errors::{AppError, AppResult, ErrorCode};
pub use formatting::title_case;
pub use meal_records::{filter_allergens, find_meal_record, MealNutrientRecord};
pub use meal_suggestions::{meals_for_goal, meals_for_goal_name, MEALS_PER_GOAL};
pub use meal_synthesis::{match_pattern, synthesize_meal_detail, MealDetail, MealPattern};
pub use models::{Gender, HealthGoal, MetricResult, ProfileInput};
pub use nutrition_calculator::{
    calculate_daily_requirements, calculate_mifflin_st_jeor, DailyRequirements,
};
