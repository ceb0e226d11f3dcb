// ABOUTME: Shared recipe database operations
// ABOUTME: Maps opaque share tokens to recipe payloads for public retrieval

use super::Database;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

/// A shared recipe payload addressed by its token
#[derive(Debug, Clone)]
pub struct SharedRecipeRecord {
    /// Opaque share token, the public address of this payload
    pub token: String,
    /// The recipe as the sharer saw it, stored verbatim
    pub recipe: serde_json::Value,
    /// When the share was created
    pub created_at: DateTime<Utc>,
}

impl Database {
    /// Create the shared recipes table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_shares(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shared_recipes (
                token TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                payload TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a recipe payload under a share token
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn save_shared_recipe(
        &self,
        token: &str,
        user_id: Uuid,
        recipe: &serde_json::Value,
    ) -> Result<()> {
        let payload =
            serde_json::to_string(recipe).context("failed to serialize shared payload")?;

        sqlx::query(
            r"
            INSERT INTO shared_recipes (token, user_id, payload, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(token)
        .bind(user_id.to_string())
        .bind(&payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch a shared recipe by token
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored payload cannot be
    /// deserialized
    pub async fn get_shared_recipe(&self, token: &str) -> Result<Option<SharedRecipeRecord>> {
        let row = sqlx::query(
            "SELECT token, payload, created_at FROM shared_recipes WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            let payload: String = row.get("payload");
            Ok(SharedRecipeRecord {
                token: row.get("token"),
                recipe: serde_json::from_str(&payload).context("corrupt shared payload")?,
                created_at: row.get("created_at"),
            })
        })
        .transpose()
    }
}
