// ABOUTME: Database management for users, saved recipes, and status checks
// ABOUTME: Owns the SQLite pool and fans out schema migrations per domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Database Management
//!
//! This module provides persistence for the recipe service. It handles
//! user storage, saved and custom recipes, shared recipe payloads, and
//! status checks, with per-domain operations split across submodules.

mod custom_recipes;
mod favorites;
mod shares;
mod status;
mod users;

pub use shares::SharedRecipeRecord;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for user and recipe storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains("::memory:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        // User tables
        self.migrate_users().await?;

        // Saved recipe tables
        self.migrate_favorites().await?;
        self.migrate_custom_recipes().await?;
        self.migrate_shares().await?;

        // Status check tables
        self.migrate_status().await?;

        Ok(())
    }
}
