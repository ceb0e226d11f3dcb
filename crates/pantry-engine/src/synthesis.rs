// ABOUTME: Sample recipe synthesis from the built-in catalog
// ABOUTME: Scores, retains with a floor, ranks, and derives bounded ingredient lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Sample Recipe Synthesis
//!
//! Builds a bounded, ranked recipe set from the static catalog when neither
//! the recipe provider nor the LLM can supply candidates. Deterministic for
//! a fixed catalog and input string: no randomness, no I/O, no failure
//! path. Even an ingredient list with zero catalog overlap produces results
//! thanks to the retention floor.

use crate::allergens::contains_allium;
use crate::catalog::CatalogEntry;
use crate::matching::{score_keywords, MatchOutcome};
use pantry_core::models::Recipe;
use std::collections::HashSet;

/// Entries retained even at score 0, so sparse queries still get results
pub const RETENTION_FLOOR: usize = 8;

/// Upper bound on synthesized recipes per query
pub const MAX_SAMPLE_RESULTS: usize = 14;

/// Upper bound on ingredients per synthesized recipe
pub const MAX_SAMPLE_INGREDIENTS: usize = 8;

/// Pantry staples appended to every synthesized ingredient list
const PANTRY_STAPLES: &[&str] = &["salt", "pepper", "olive oil", "herbs"];

struct ScoredEntry<'a> {
    entry: &'a CatalogEntry,
    outcome: MatchOutcome,
}

/// Synthesize sample recipes for a raw comma-separated ingredient string.
///
/// The string is split on commas with each segment trimmed and
/// lower-cased; empty segments are dropped. Catalog entries are scored
/// against the resulting token list, retained while scoring above zero or
/// while the retention floor is unmet, stable-sorted by score descending
/// (ties keep catalog order), and capped at [`MAX_SAMPLE_RESULTS`].
#[must_use]
pub fn synthesize(raw_ingredients: &str, catalog: &[CatalogEntry]) -> Vec<Recipe> {
    let user_ingredients: Vec<String> = raw_ingredients
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut retained: Vec<ScoredEntry<'_>> = Vec::new();
    for entry in catalog {
        let outcome = score_keywords(&user_ingredients, entry.keywords);
        // Keep some recipes even without matches, for variety
        if outcome.score > 0 || retained.len() < RETENTION_FLOOR {
            retained.push(ScoredEntry { entry, outcome });
        }
    }

    // Stable sort: equal scores keep catalog order
    retained.sort_by(|a, b| b.outcome.score.cmp(&a.outcome.score));
    retained.truncate(MAX_SAMPLE_RESULTS);

    tracing::debug!(
        tokens = user_ingredients.len(),
        results = retained.len(),
        "synthesized sample recipes"
    );

    retained
        .into_iter()
        .map(|scored| build_recipe(&scored, &user_ingredients))
        .collect()
}

/// Assemble the bounded ingredient list and materialize the recipe.
///
/// Order of concatenation: matched user ingredients, the full user list,
/// pantry staples, then onion and garlic when the template calls for them.
/// Case-insensitive de-duplication keeps the first occurrence; the final
/// list is truncated to [`MAX_SAMPLE_INGREDIENTS`] and the allium flag is
/// derived from that final list rather than copied from the template.
fn build_recipe(scored: &ScoredEntry<'_>, user_ingredients: &[String]) -> Recipe {
    let allium_extras: &[&str] = if scored.entry.has_onion_garlic {
        &["onion", "garlic"]
    } else {
        &[]
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut ingredients: Vec<String> = Vec::new();
    let candidates = scored
        .outcome
        .matched
        .iter()
        .map(String::as_str)
        .chain(user_ingredients.iter().map(String::as_str))
        .chain(PANTRY_STAPLES.iter().copied())
        .chain(allium_extras.iter().copied());
    for candidate in candidates {
        let key = candidate.to_lowercase();
        if seen.insert(key) {
            ingredients.push(candidate.to_owned());
        }
    }
    ingredients.truncate(MAX_SAMPLE_INGREDIENTS);

    let has_onion_garlic = contains_allium(ingredients.iter().map(String::as_str));
    scored.entry.to_recipe(ingredients, has_onion_garlic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SAMPLE_CATALOG;

    #[test]
    fn floor_holds_even_without_matches() {
        let recipes = synthesize("xyzzy, plugh", SAMPLE_CATALOG);
        assert_eq!(
            recipes.len(),
            RETENTION_FLOOR.min(SAMPLE_CATALOG.len()),
            "zero-match query still returns the retention floor"
        );
    }

    #[test]
    fn matching_entries_rank_before_floor_entries() {
        let recipes = synthesize("chicken, rice", SAMPLE_CATALOG);
        assert!(!recipes.is_empty());
        // The biryani template matches both tokens, so it must sit ahead of
        // every zero-score entry kept by the floor.
        let biryani_pos = recipes.iter().position(|recipe| recipe.id == 3002);
        let caprese_pos = recipes.iter().position(|recipe| recipe.id == 1001);
        match (biryani_pos, caprese_pos) {
            (Some(biryani), Some(caprese)) => assert!(biryani < caprese),
            (Some(_), None) => {}
            _ => assert!(biryani_pos.is_some(), "biryani should be selected"),
        }
    }

    #[test]
    fn ingredient_lists_are_bounded_and_deduplicated() {
        let recipes = synthesize("chicken, rice, salt, SALT", SAMPLE_CATALOG);
        for recipe in &recipes {
            assert!(recipe.ingredients.len() <= MAX_SAMPLE_INGREDIENTS);
            let mut lowered: Vec<String> = recipe
                .ingredients
                .iter()
                .map(|ingredient| ingredient.to_lowercase())
                .collect();
            lowered.sort();
            let before = lowered.len();
            lowered.dedup();
            assert_eq!(before, lowered.len(), "case-duplicates in {:?}", recipe.ingredients);
        }
    }

    #[test]
    fn allium_flag_follows_the_synthesized_list() {
        let recipes = synthesize("tomato, basil", SAMPLE_CATALOG);
        for recipe in &recipes {
            let derived = contains_allium(recipe.ingredients.iter().map(String::as_str));
            assert_eq!(
                recipe.has_onion_garlic, derived,
                "flag out of sync with ingredients for {}",
                recipe.title
            );
        }
    }

    #[test]
    fn empty_string_still_fills_the_floor() {
        let recipes = synthesize("", SAMPLE_CATALOG);
        assert_eq!(recipes.len(), RETENTION_FLOOR.min(SAMPLE_CATALOG.len()));
        // With no user tokens the list is staples plus template extras only
        for recipe in &recipes {
            assert!(recipe.ingredients.len() <= MAX_SAMPLE_INGREDIENTS);
            assert!(recipe.ingredients.iter().any(|ingredient| ingredient == "salt"));
        }
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let first = synthesize("chicken, rice", SAMPLE_CATALOG);
        let second = synthesize("chicken, rice", SAMPLE_CATALOG);
        assert_eq!(first, second);
    }
}
