// ABOUTME: Meal detail synthesis from lexical pattern matching over meal names
// ABOUTME: Infers ingredient lists and recipe procedures with ordered first-match-wins rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Meal Detail Synthesizer
//!
//! Given a meal-name string, infers a plausible ingredient list and a
//! recipe procedure entirely through case-insensitive substring matching.
//! The rule set is an ordered list of (predicate, template) pairs evaluated
//! first-match-wins, keeping rules extensible and independently testable.
//!
//! Everything here is a pure function of the input string: synthesis never
//! consults the meal's actual nutrient source, so the generated ingredients
//! and recipe are heuristic approximations rather than ground truth. In the
//! same vein, the "main ingredient" is simply the first whitespace-delimited
//! token of the name, which for emoji-prefixed catalog entries is the emoji
//! itself. These are known limitations of the heuristic, kept intentionally.

use crate::formatting::title_case;
use serde::{Deserialize, Serialize};

/// Synthesized detail for a meal name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDetail {
    /// Title-cased display form of the meal name
    pub display_name: String,
    /// Main ingredient followed by the matched companion pair
    pub ingredients: Vec<String>,
    /// Ordered preparation steps, exactly as many as the matched template
    pub recipe_steps: Vec<String>,
}

/// Lexical pattern a meal name can match, in rule order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealPattern {
    /// Name contains "juice"
    Juice,
    /// Name contains "butter" or "oil"
    ButterOrOil,
    /// Name contains "cooked"
    Cooked,
    /// No specific pattern matched
    Generic,
}

/// One (predicate, template) synthesis rule
struct SynthesisRule {
    pattern: MealPattern,
    matches: fn(&str) -> bool,
    companions: &'static [&'static str],
}

/// Ordered rule table; the first matching rule wins. The final rule is the
/// unconditional generic fallback, so matching is total.
static RULES: [SynthesisRule; 4] = [
    SynthesisRule {
        pattern: MealPattern::Juice,
        matches: |name| name.contains("juice"),
        companions: &["Water", "Natural Sweeteners"],
    },
    SynthesisRule {
        pattern: MealPattern::ButterOrOil,
        matches: |name| name.contains("butter") || name.contains("oil"),
        companions: &["Natural Oils", "Preservatives"],
    },
    SynthesisRule {
        pattern: MealPattern::Cooked,
        matches: |name| name.contains("cooked"),
        companions: &["Water", "Salt", "Spices"],
    },
    SynthesisRule {
        pattern: MealPattern::Generic,
        matches: |_| true,
        companions: &["Natural Ingredients", "Seasonings"],
    },
];

/// Match a meal name against the ordered rule table
///
/// Matching is case-insensitive over the whole name and total: names with
/// no recognized pattern resolve to [`MealPattern::Generic`] rather than
/// failing.
#[must_use]
pub fn match_pattern(name: &str) -> MealPattern {
    matched_rule(&name.to_lowercase()).pattern
}

fn matched_rule(name_lower: &str) -> &'static SynthesisRule {
    // The generic rule matches everything, so the iterator cannot be empty.
    RULES
        .iter()
        .find(|rule| (rule.matches)(name_lower))
        .unwrap_or(&RULES[3])
}

/// Synthesize ingredients and a recipe for a meal name
///
/// The ingredient list is the title-cased first token of the name plus the
/// matched rule's fixed companion pair. The recipe is the matched rule's
/// template; the juice template substitutes the portion of the name
/// preceding the literal `" juice"` (located case-insensitively) into its
/// first step.
#[must_use]
pub fn synthesize_meal_detail(name: &str) -> MealDetail {
    let name_lower = name.to_lowercase();
    let rule = matched_rule(&name_lower);

    tracing::debug!(pattern = ?rule.pattern, "matched meal synthesis rule");

    let main_ingredient = title_case(name_lower.split(' ').next().unwrap_or(""));

    let mut ingredients = Vec::with_capacity(1 + rule.companions.len());
    ingredients.push(main_ingredient);
    ingredients.extend(rule.companions.iter().map(|c| (*c).to_owned()));

    MealDetail {
        display_name: title_case(name),
        ingredients,
        recipe_steps: recipe_steps(rule.pattern, &name_lower),
    }
}

/// Build the recipe template for a matched pattern
fn recipe_steps(pattern: MealPattern, name_lower: &str) -> Vec<String> {
    match pattern {
        MealPattern::Juice => vec![
            format!("Extract fresh juice from {}", juice_subject(name_lower)),
            "Strain to remove pulp if desired".to_owned(),
            "Serve chilled or at room temperature".to_owned(),
            "Best consumed fresh for maximum nutrition".to_owned(),
        ],
        MealPattern::ButterOrOil => vec![
            "Use high-quality source ingredients".to_owned(),
            "Process using cold-press method when applicable".to_owned(),
            "Store in a cool, dark place".to_owned(),
            "Use as a spread or cooking ingredient".to_owned(),
            "Refrigerate after opening".to_owned(),
        ],
        MealPattern::Cooked => vec![
            "Clean and prepare the main ingredient".to_owned(),
            "Add water and bring to a boil".to_owned(),
            "Reduce heat and simmer until tender".to_owned(),
            "Season with salt and spices to taste".to_owned(),
            "Serve warm as a side dish or main course".to_owned(),
        ],
        MealPattern::Generic => vec![
            "Prepare fresh ingredients".to_owned(),
            "Follow standard preparation methods".to_owned(),
            "Cook until desired texture is achieved".to_owned(),
            "Season to taste".to_owned(),
            "Serve immediately for best flavor and nutrition".to_owned(),
        ],
    }
}

/// Title-cased portion of the name preceding `" juice"`
///
/// Falls back to the whole name when the marker is absent (a name can match
/// the juice rule through "juice" at the very start, with no space before
/// it).
fn juice_subject(name_lower: &str) -> String {
    name_lower
        .find(" juice")
        .map_or_else(|| title_case(name_lower), |idx| title_case(&name_lower[..idx]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_first_match_wins() {
        // "cooked" and "oil" both appear; the butter/oil rule precedes the
        // cooked rule in the table.
        assert_eq!(match_pattern("Cooked Olive Oil Rice"), MealPattern::ButterOrOil);
        // "juice" beats everything.
        assert_eq!(match_pattern("Cooked Apple Juice Butter"), MealPattern::Juice);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(match_pattern("FRESH APPLE JUICE"), MealPattern::Juice);
        assert_eq!(match_pattern("Peanut BUTTER Toast"), MealPattern::ButterOrOil);
    }

    #[test]
    fn test_unmatched_names_resolve_to_generic() {
        assert_eq!(match_pattern("Greek Salad"), MealPattern::Generic);
    }

    #[test]
    fn test_juice_subject_precedes_marker() {
        assert_eq!(juice_subject("fresh apple juice"), "Fresh Apple");
        assert_eq!(juice_subject("orange juice with pulp"), "Orange");
    }

    #[test]
    fn test_juice_subject_without_marker_uses_whole_name() {
        // Matches the juice rule but has no " juice" marker.
        assert_eq!(juice_subject("juiced carrots"), "Juiced Carrots");
    }

    #[test]
    fn test_every_branch_yields_at_least_two_ingredients() {
        for name in ["apple juice", "peanut butter", "cooked rice", "plain salad"] {
            let detail = synthesize_meal_detail(name);
            assert!(detail.ingredients.len() >= 2, "too few ingredients for {name}");
        }
    }
}
