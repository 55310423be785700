// ABOUTME: Text normalization helpers for meal-name display
// ABOUTME: Title-casing with exact single-space split semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide

//! Text Normalizer
//!
//! Canonicalizes free-form meal-name strings into title-cased display form.

/// Title-case a string, word by word
///
/// Splits on single spaces, uppercases the first character of each word,
/// lowercases the remainder, and rejoins with single spaces. Runs of
/// consecutive spaces are *not* collapsed: each empty token between them
/// passes through unchanged, so the output is round-trippable against the
/// input's spacing.
#[must_use]
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word and lowercase the rest
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
