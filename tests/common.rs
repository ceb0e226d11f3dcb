// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, resource, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pantry_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use pantry_core::models::{Recipe, RecipeNutrition, User};
use pantry_server::auth::{self, AuthManager};
use pantry_server::config::ServerConfig;
use pantry_server::database::Database;
use pantry_server::server::ServerResources;
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database with migrations applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(b"test-jwt-secret", 24)
}

/// Create a standard test user
pub async fn create_test_user(database: &Database) -> Result<(Uuid, User)> {
    create_test_user_with_email(database, "test@example.com").await
}

/// Create a test user with custom email
pub async fn create_test_user_with_email(database: &Database, email: &str) -> Result<(Uuid, User)> {
    let user = User::new(
        email.to_owned(),
        "test_hash".to_owned(),
        Some("Test User".to_owned()),
    );
    let user_id = user.id;

    database.create_user(&user).await?;
    Ok((user_id, user))
}

/// Create test `ServerResources` with both external tiers disabled
///
/// Mock providers can be attached afterwards through the
/// `with_recipe_api` / `with_llm` builders.
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let config = ServerConfig::for_tests();
    let database = Database::new(&config.database.url).await?;
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    );
    Ok(Arc::new(ServerResources::new(database, auth_manager, config)))
}

/// Create a user with a real password hash and mint a bearer token
///
/// Returns (`user_id`, `Authorization` header value). The password is
/// hashed with bcrypt so login and re-verification flows work against it.
pub async fn create_authenticated_user(
    resources: &Arc<ServerResources>,
    email: &str,
    password: &str,
) -> Result<(Uuid, String)> {
    let user = User::new(
        email.to_owned(),
        auth::hash_password(password)?,
        Some("Test User".to_owned()),
    );
    let user_id = user.id;

    resources.database.create_user(&user).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user_id, format!("Bearer {token}")))
}

/// A minimal recipe for persistence tests
pub fn sample_recipe(id: i64, ready_in_minutes: i32, has_onion_garlic: bool) -> Recipe {
    Recipe {
        id,
        title: format!("Test Recipe {id}"),
        image: "https://example.com/recipe.jpg".to_owned(),
        ready_in_minutes,
        servings: 4,
        nutrition: RecipeNutrition {
            calories: 350.0,
            protein: 20.0,
            carbs: 40.0,
            fat: 12.0,
            fiber: 5.0,
        },
        has_onion_garlic,
        ingredients: vec!["chicken".to_owned(), "rice".to_owned()],
        instructions: vec!["Cook everything.".to_owned()],
    }
}
