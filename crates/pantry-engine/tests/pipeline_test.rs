// ABOUTME: End-to-end tests for the synthesize -> categorize pipeline
// ABOUTME: Pins exact ranking, bucket layout, and wire shape for known queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_core::models::Recipe;
use pantry_engine::{
    categorize, contains_allium, synthesize, MAX_PER_BUCKET, MAX_SAMPLE_INGREDIENTS,
    MAX_SAMPLE_RESULTS, RETENTION_FLOOR, SAMPLE_CATALOG,
};

fn ids(recipes: &[Recipe]) -> Vec<i64> {
    recipes.iter().map(|recipe| recipe.id).collect()
}

/// The canonical two-token query. Biryani matches both tokens and leads;
/// seven single-token matches follow in catalog order; the retention floor
/// fills the tail with the first zero-score templates.
#[test]
fn test_two_token_query_ranking_is_stable() {
    let recipes = synthesize("chicken, rice", SAMPLE_CATALOG);

    assert_eq!(recipes.len(), MAX_SAMPLE_RESULTS);
    assert_eq!(
        ids(&recipes),
        vec![3002, 1002, 1006, 2001, 2002, 2003, 2006, 3005, 1001, 1003, 1004, 1005, 1007, 1008]
    );
    assert_eq!(recipes[0].title, "Traditional Chicken Biryani");
    assert_eq!(recipes[0].ready_in_minutes, 90);
    assert_eq!(recipes[0].servings, 8);
}

#[test]
fn test_two_token_query_ingredient_assembly() {
    let recipes = synthesize("chicken, rice", SAMPLE_CATALOG);

    // Double match: both tokens lead, then staples, then the template's
    // allium extras land exactly at the cap.
    let biryani = recipes.iter().find(|recipe| recipe.id == 3002).unwrap();
    assert_eq!(
        biryani.ingredients,
        vec!["chicken", "rice", "salt", "pepper", "olive oil", "herbs", "onion", "garlic"]
    );
    assert!(biryani.has_onion_garlic);

    // Zero-score floor entry without allium extras: user tokens plus staples.
    let caprese = recipes.iter().find(|recipe| recipe.id == 1001).unwrap();
    assert_eq!(
        caprese.ingredients,
        vec!["chicken", "rice", "salt", "pepper", "olive oil", "herbs"]
    );
    assert!(!caprese.has_onion_garlic);

    // Zero-score floor entry whose template calls for allium: the extras
    // still fit under the cap, so the flag holds.
    let tikka = recipes.iter().find(|recipe| recipe.id == 1004).unwrap();
    assert_eq!(tikka.ingredients.len(), MAX_SAMPLE_INGREDIENTS);
    assert!(tikka.has_onion_garlic);
}

#[test]
fn test_two_token_query_bucket_layout() {
    let categorized = categorize(synthesize("chicken, rice", SAMPLE_CATALOG));

    assert_eq!(ids(&categorized.low.with_onion_garlic), vec![1002, 1006, 1004, 1008]);
    assert_eq!(ids(&categorized.low.without_onion_garlic), vec![1001, 1003, 1005, 1007]);
    assert_eq!(ids(&categorized.medium.with_onion_garlic), vec![2001, 2002, 2003, 2006]);
    assert!(categorized.medium.without_onion_garlic.is_empty());
    assert_eq!(ids(&categorized.high.with_onion_garlic), vec![3002, 3005]);
    assert!(categorized.high.without_onion_garlic.is_empty());

    // Every bucket sits under the cap, so nothing was dropped.
    assert_eq!(categorized.len(), MAX_SAMPLE_RESULTS);
}

/// A five-token query overflows both bounds at once: seventeen templates
/// score above zero or ride the floor (capped to fourteen), and the user
/// tokens plus staples fill every ingredient list before the allium extras
/// can be appended.
#[test]
fn test_wide_query_crowds_out_allium_extras() {
    let recipes = synthesize("italian, rice, chicken, paneer, pasta", SAMPLE_CATALOG);

    assert_eq!(recipes.len(), MAX_SAMPLE_RESULTS);
    assert_eq!(
        ids(&recipes),
        vec![2001, 2007, 3002, 3004, 1002, 1004, 1006, 2002, 2003, 2005, 2006, 3005, 1001, 1003]
    );

    for recipe in &recipes {
        assert_eq!(recipe.ingredients.len(), MAX_SAMPLE_INGREDIENTS);
        assert!(
            !recipe.has_onion_garlic,
            "{} kept an allium despite the full list",
            recipe.title
        );
        assert!(!contains_allium(recipe.ingredients.iter().map(String::as_str)));
    }
}

#[test]
fn test_wide_query_truncates_the_crowded_bucket() {
    let categorized = categorize(synthesize("italian, rice, chicken, paneer, pasta", SAMPLE_CATALOG));

    // All allium extras were crowded out, so the with_onion_garlic side is
    // empty across every tier.
    assert!(categorized.low.with_onion_garlic.is_empty());
    assert!(categorized.medium.with_onion_garlic.is_empty());
    assert!(categorized.high.with_onion_garlic.is_empty());

    assert_eq!(ids(&categorized.low.without_onion_garlic), vec![1002, 1004, 1006, 1001, 1003]);
    // Six medium templates survive synthesis; the bucket keeps the first five.
    assert_eq!(
        ids(&categorized.medium.without_onion_garlic),
        vec![2001, 2007, 2002, 2003, 2005]
    );
    assert_eq!(categorized.medium.without_onion_garlic.len(), MAX_PER_BUCKET);
    assert_eq!(ids(&categorized.high.without_onion_garlic), vec![3002, 3004, 3005]);

    assert_eq!(categorized.len(), MAX_SAMPLE_RESULTS - 1);
}

#[test]
fn test_zero_overlap_query_still_categorizes() {
    let categorized = categorize(synthesize("dragonfruit, durian", SAMPLE_CATALOG));

    // Floor entries are the first eight templates, split across low-tier
    // buckets by their template allium flag.
    assert_eq!(categorized.len(), RETENTION_FLOOR);
    assert_eq!(ids(&categorized.low.with_onion_garlic), vec![1002, 1004, 1006, 1008]);
    assert_eq!(ids(&categorized.low.without_onion_garlic), vec![1001, 1003, 1005, 1007]);
    assert!(categorized.medium.with_onion_garlic.is_empty());
    assert!(categorized.high.without_onion_garlic.is_empty());
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = categorize(synthesize("chicken, rice", SAMPLE_CATALOG));
    let second = categorize(synthesize("chicken, rice", SAMPLE_CATALOG));
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

/// The categorized result serializes to the exact six-key wire shape the
/// frontend consumes, with camelCase recipe fields.
#[test]
fn test_wire_shape_of_categorized_results() {
    let categorized = categorize(synthesize("chicken, rice", SAMPLE_CATALOG));
    let value = serde_json::to_value(&categorized).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    for tier in ["low", "medium", "high"] {
        let buckets = object.get(tier).unwrap().as_object().unwrap();
        assert_eq!(buckets.len(), 2);
        assert!(buckets.contains_key("with_onion_garlic"));
        assert!(buckets.contains_key("without_onion_garlic"));
    }

    let first = &value["high"]["with_onion_garlic"][0];
    assert_eq!(first["id"], 3002);
    assert_eq!(first["readyInMinutes"], 90);
    assert_eq!(first["hasOnionGarlic"], true);
    assert!(first["nutrition"]["calories"].is_number());
    assert!(first["instructions"].as_array().unwrap().is_empty());
}
