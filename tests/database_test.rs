// ABOUTME: Integration tests for the database layer
// ABOUTME: Covers users, reset tokens, favorites, custom recipes, shares, and status checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use common::{create_test_database, create_test_user, create_test_user_with_email, sample_recipe};
use pantry_core::models::{CustomRecipe, RecipeNutrition, StatusCheck};
use pantry_server::database::Database;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_fetch_user() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, user) = create_test_user(&database).await?;

    let by_id = database.get_user_by_id(user_id).await?.unwrap();
    assert_eq!(by_id.id, user_id);
    assert_eq!(by_id.email, user.email);
    assert_eq!(by_id.display_name, user.display_name);
    assert_eq!(by_id.password_hash, user.password_hash);

    let by_email = database.get_user_by_email(&user.email).await?.unwrap();
    assert_eq!(by_email.id, user_id);

    assert!(database.get_user_by_id(Uuid::new_v4()).await?.is_none());
    assert!(database.get_user_by_email("nobody@example.com").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_file_backed_database_is_created_on_demand() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("pantry_test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    // The file does not exist yet; connecting must create it
    let database = Database::new(&db_url).await?;
    assert!(db_path.exists());

    let (user_id, _) = create_test_user(&database).await?;

    // A second connection sees the persisted row
    let reopened = Database::new(&db_url).await?;
    assert!(reopened.get_user_by_id(user_id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() -> Result<()> {
    let database = create_test_database().await?;
    let (_, user) = create_test_user(&database).await?;

    let error = database.create_user(&user).await.unwrap_err();
    assert!(
        error.to_string().contains("already in use"),
        "unexpected error: {error}"
    );
    Ok(())
}

#[tokio::test]
async fn test_reset_token_flow() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;

    database
        .set_reset_token(user_id, "reset-abc", Utc::now() + Duration::hours(1))
        .await?;

    let found = database.get_user_by_reset_token("reset-abc").await?.unwrap();
    assert_eq!(found.id, user_id);
    assert!(database.get_user_by_reset_token("wrong-token").await?.is_none());

    // Consuming the reset clears the token alongside the hash swap
    database.update_password(user_id, "new_hash").await?;
    let updated = database.get_user_by_id(user_id).await?.unwrap();
    assert_eq!(updated.password_hash, "new_hash");
    assert!(database.get_user_by_reset_token("reset-abc").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_expired_reset_token_is_ignored() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;

    database
        .set_reset_token(user_id, "stale-token", Utc::now() - Duration::hours(1))
        .await?;

    assert!(database.get_user_by_reset_token("stale-token").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_user_cascades_owned_rows() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;

    database.save_favorite(user_id, &sample_recipe(42, 25, true)).await?;
    database.save_custom_recipe(&custom_recipe(user_id)).await?;
    database
        .save_shared_recipe("share-token", user_id, &json!({"title": "Shared"}))
        .await?;

    database.delete_user(user_id).await?;

    assert!(database.get_user_by_id(user_id).await?.is_none());
    assert!(database.get_favorites(user_id).await?.is_empty());
    assert!(database.get_custom_recipes(user_id).await?.is_empty());
    assert!(database.get_shared_recipe("share-token").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_favorite_round_trip() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;
    let recipe = sample_recipe(42, 25, true);

    assert!(!database.favorite_exists(user_id, 42).await?);
    database.save_favorite(user_id, &recipe).await?;
    assert!(database.favorite_exists(user_id, 42).await?);

    // The stored payload is the exact recipe the caller saved
    let favorites = database.get_favorites(user_id).await?;
    assert_eq!(favorites, vec![recipe]);

    // Saving the same recipe twice trips the uniqueness guard
    assert!(database.save_favorite(user_id, &sample_recipe(42, 25, true)).await.is_err());

    assert!(database.remove_favorite(user_id, 42).await?);
    assert!(!database.favorite_exists(user_id, 42).await?);
    assert!(!database.remove_favorite(user_id, 42).await?);
    Ok(())
}

#[tokio::test]
async fn test_favorites_are_scoped_per_user() -> Result<()> {
    let database = create_test_database().await?;
    let (first_id, _) = create_test_user(&database).await?;
    let (second_id, _) = create_test_user_with_email(&database, "other@example.com").await?;

    database.save_favorite(first_id, &sample_recipe(7, 15, false)).await?;

    assert!(!database.favorite_exists(second_id, 7).await?);
    assert!(database.get_favorites(second_id).await?.is_empty());

    // The uniqueness guard is per user, so the other account can save the
    // same recipe id
    database.save_favorite(second_id, &sample_recipe(7, 15, false)).await?;
    assert!(database.favorite_exists(second_id, 7).await?);
    Ok(())
}

#[tokio::test]
async fn test_custom_recipe_round_trip() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;
    let recipe = custom_recipe(user_id);

    database.save_custom_recipe(&recipe).await?;

    let stored = database.get_custom_recipes(user_id).await?;
    assert_eq!(stored, vec![recipe]);
    Ok(())
}

#[tokio::test]
async fn test_delete_custom_recipe_checks_ownership() -> Result<()> {
    let database = create_test_database().await?;
    let (owner_id, _) = create_test_user(&database).await?;
    let (other_id, _) = create_test_user_with_email(&database, "other@example.com").await?;
    let recipe = custom_recipe(owner_id);

    database.save_custom_recipe(&recipe).await?;

    assert!(!database.delete_custom_recipe(other_id, recipe.id).await?);
    assert_eq!(database.get_custom_recipes(owner_id).await?.len(), 1);

    assert!(database.delete_custom_recipe(owner_id, recipe.id).await?);
    assert!(database.get_custom_recipes(owner_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_shared_recipe_round_trip() -> Result<()> {
    let database = create_test_database().await?;
    let (user_id, _) = create_test_user(&database).await?;
    let payload = json!({
        "title": "Weeknight Stir Fry",
        "ingredients": ["chicken", "rice", "soy sauce"],
        "readyInMinutes": 20
    });

    database.save_shared_recipe("abc123", user_id, &payload).await?;

    let record = database.get_shared_recipe("abc123").await?.unwrap();
    assert_eq!(record.token, "abc123");
    assert_eq!(record.recipe, payload);
    assert!(record.created_at <= Utc::now());

    assert!(database.get_shared_recipe("missing").await?.is_none());

    // Tokens are primary keys; reusing one fails
    assert!(database.save_shared_recipe("abc123", user_id, &payload).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_status_checks_list_in_order() -> Result<()> {
    let database = create_test_database().await?;

    let mut first = StatusCheck::new("probe-one".to_owned());
    first.timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
    let mut second = StatusCheck::new("probe-two".to_owned());
    second.timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 11, 0, 0).unwrap();

    // Insert out of order; the listing sorts by timestamp
    database.create_status_check(&second).await?;
    database.create_status_check(&first).await?;

    let checks = database.get_status_checks().await?;
    assert_eq!(checks, vec![first, second]);
    Ok(())
}

/// Custom recipe with a fixed whole-second timestamp so equality survives
/// the round trip through SQLite's text encoding.
fn custom_recipe(user_id: Uuid) -> CustomRecipe {
    CustomRecipe {
        id: Uuid::new_v4(),
        user_id,
        title: "Grandma's Lentil Soup".to_owned(),
        ingredients: vec!["lentils".to_owned(), "carrot".to_owned(), "celery".to_owned()],
        instructions: vec!["Simmer for 40 minutes.".to_owned()],
        ready_in_minutes: 45,
        servings: 6,
        nutrition: RecipeNutrition {
            calories: 280.0,
            protein: 18.0,
            carbs: 45.0,
            fat: 2.0,
            fiber: 16.0,
        },
        has_onion_garlic: false,
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
    }
}
