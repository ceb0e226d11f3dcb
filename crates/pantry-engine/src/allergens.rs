// ABOUTME: Allium (onion/garlic family) detection over ingredient text
// ABOUTME: Case-insensitive substring matching against a fixed keyword set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Allium Detection
//!
//! Flags recipes whose ingredient text mentions an onion/garlic-family
//! ingredient. Matching is deliberately loose: keywords are tested as
//! case-insensitive substrings, not whole words, so "3 garlic cloves,
//! minced" and "Onions" both flag. Upstream sources that carry both a
//! canonical ingredient name and a free-text description must run both
//! representations through the detector.

/// Textual forms of onion, garlic, shallot, leek, scallion, and chive,
/// including the common qualified variants. Matching is substring-based,
/// so the base words already cover most qualified forms; the explicit
/// variants are kept for clarity and for sources that abbreviate oddly.
pub const ALLIUM_KEYWORDS: &[&str] = &[
    "onion",
    "onions",
    "garlic",
    "garlics",
    "shallot",
    "shallots",
    "leek",
    "leeks",
    "scallion",
    "scallions",
    "chive",
    "chives",
    "spring onion",
    "green onion",
    "pearl onion",
    "red onion",
    "white onion",
    "yellow onion",
    "garlic powder",
    "onion powder",
    "garlic paste",
    "garlic clove",
    "minced garlic",
];

/// True when a single piece of ingredient text mentions an allium.
#[must_use]
pub fn is_allium(text: &str) -> bool {
    let lowered = text.to_lowercase();
    ALLIUM_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// True when any ingredient in the sequence mentions an allium.
///
/// Returns false for an empty sequence. Pure function with no failure
/// conditions; malformed or empty strings simply never match.
pub fn contains_allium<'a, I>(ingredients: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    ingredients.into_iter().any(is_allium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_qualified_variants() {
        assert!(is_allium("garlic clove"));
        assert!(is_allium("2 Spring Onions, sliced"));
        assert!(is_allium("GARLIC POWDER"));
    }

    #[test]
    fn detects_substring_inside_free_text() {
        assert!(contains_allium(["1 tbsp minced garlic, to taste"]));
        assert!(contains_allium(["caramelized onions"]));
    }

    #[test]
    fn clean_ingredients_do_not_flag() {
        assert!(!contains_allium(["tomato", "basil", "mozzarella"]));
        assert!(!is_allium("olive oil"));
    }

    #[test]
    fn empty_input_is_not_flagged() {
        assert!(!contains_allium(std::iter::empty::<&str>()));
        assert!(!is_allium(""));
    }
}
