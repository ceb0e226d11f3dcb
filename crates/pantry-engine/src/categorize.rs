// ABOUTME: Partitions recipes into the time-tier × dietary-bucket taxonomy
// ABOUTME: Input order preserved within buckets, each bucket truncated to five
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Recipe Categorization
//!
//! The final shaping step of every search: a flat recipe list becomes the
//! three-tier (`low` / `medium` / `high`) by two-bucket
//! (`with_onion_garlic` / `without_onion_garlic`) response. Classification
//! is a pure per-recipe decision; ordering within a bucket is the input
//! order, and each bucket keeps at most [`MAX_PER_BUCKET`] entries —
//! excess recipes are dropped, not deferred.

use pantry_core::models::{CategorizedRecipes, DietaryBucket, Recipe, TimeTier};

/// Maximum recipes kept per (tier, bucket) list
pub const MAX_PER_BUCKET: usize = 5;

/// Partition recipes into the fixed taxonomy.
///
/// Every recipe lands in exactly one of the six buckets. All six keys are
/// present in the result even when empty, and the function is
/// deterministic: the same input list always yields an identical result.
#[must_use]
pub fn categorize(recipes: Vec<Recipe>) -> CategorizedRecipes {
    let total = recipes.len();
    let mut result = CategorizedRecipes::default();

    for recipe in recipes {
        let tier = TimeTier::classify(recipe.ready_in_minutes);
        let bucket = DietaryBucket::from_flag(recipe.has_onion_garlic);
        result.tier_mut(tier).bucket_mut(bucket).push(recipe);
    }

    for tier in [TimeTier::Low, TimeTier::Medium, TimeTier::High] {
        let buckets = result.tier_mut(tier);
        buckets.with_onion_garlic.truncate(MAX_PER_BUCKET);
        buckets.without_onion_garlic.truncate(MAX_PER_BUCKET);
    }

    tracing::debug!(input = total, kept = result.len(), "categorized recipes");
    result
}
