// ABOUTME: Nutrient record model and pure lookup over externally supplied records
// ABOUTME: Name matching with exact-then-partial fallback plus allergen filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Meal Record Matching
//!
//! The external data service serves per-100g nutrient records keyed by meal
//! name. This module provides the pure matching logic the rest of the
//! system combines with synthesized detail: a whitespace-normalized exact
//! match with a substring fallback, and allergen filtering over record
//! names. A lookup miss is a caller-level "no data" condition (`None`),
//! never an engine error.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One nutrient record as served by the external data service (per 100 g)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealNutrientRecord {
    /// Meal name, the join key between suggestions and details
    pub name: String,
    /// Calories (kcal per 100g)
    pub calories: f64,
    /// Protein (g per 100g)
    pub protein_g: f64,
    /// Fat (g per 100g)
    pub fat_g: f64,
    /// Carbohydrates (g per 100g)
    pub carbohydrates_g: f64,
    /// Dietary fiber (g per 100g)
    pub fiber_g: f64,
    /// Sugars (g per 100g)
    pub sugars_g: f64,
    /// Vitamin C (mg per 100g)
    pub vitamin_c_mg: f64,
    /// Vitamin B11 (mg per 100g)
    pub vitamin_b11_mg: f64,
    /// Sodium (mg per 100g)
    pub sodium_mg: f64,
    /// Calcium (mg per 100g)
    pub calcium_mg: f64,
    /// Iron (mg per 100g)
    pub iron_mg: f64,
}

/// Lowercase a name and collapse internal whitespace runs to single spaces
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the record matching a meal name
///
/// The query and record names are compared in normalized form (lowercase,
/// collapsed whitespace), so both display-cased ("Margarine With Yoghurt")
/// and raw names resolve. An exact match is preferred; failing that, the
/// first record whose name *contains* the query wins.
#[must_use]
pub fn find_meal_record<'a>(
    records: &'a [MealNutrientRecord],
    name: &str,
) -> Option<&'a MealNutrientRecord> {
    let query = normalize_name(name);
    if query.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|record| normalize_name(&record.name) == query)
        .or_else(|| {
            let partial = records
                .iter()
                .find(|record| normalize_name(&record.name).contains(&query));
            if partial.is_some() {
                debug!(meal = %name, "no exact nutrient record, using partial match");
            }
            partial
        })
}

/// Filter out records whose name contains any listed allergen
///
/// Allergens arrive as a comma-separated free-form string; entries are
/// trimmed and matched case-insensitively as substrings of the record name.
/// An empty list or the literal `"none"` disables filtering entirely.
#[must_use]
pub fn filter_allergens<'a>(
    records: &'a [MealNutrientRecord],
    allergies: Option<&str>,
) -> Vec<&'a MealNutrientRecord> {
    let allergens: Vec<String> = allergies
        .map(str::trim)
        .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("none"))
        .map(|a| {
            a.split(',')
                .map(|entry| entry.trim().to_lowercase())
                .filter(|entry| !entry.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if allergens.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            let name_lower = record.name.to_lowercase();
            !allergens.iter().any(|allergen| name_lower.contains(allergen))
        })
        .collect()
}
