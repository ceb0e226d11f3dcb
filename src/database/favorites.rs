// ABOUTME: Favorite recipe database operations
// ABOUTME: Stores full Recipe payloads per user with a uniqueness guard per recipe id

use super::Database;
use anyhow::{Context, Result};
use chrono::Utc;
use pantry_core::models::Recipe;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the favorite recipes table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_favorites(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS favorite_recipes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                recipe_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                image TEXT NOT NULL,
                ready_in_minutes INTEGER NOT NULL,
                servings INTEGER NOT NULL,
                has_onion_garlic BOOLEAN NOT NULL,
                payload TEXT NOT NULL,
                created_at DATETIME NOT NULL,
                UNIQUE(user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_favorite_recipes_user ON favorite_recipes(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check whether a user already saved a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn favorite_exists(&self, user_id: Uuid, recipe_id: i64) -> Result<bool> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM favorite_recipes WHERE user_id = $1 AND recipe_id = $2",
        )
        .bind(user_id.to_string())
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }

    /// Save a recipe to a user's favorites
    ///
    /// The full recipe is kept as a JSON payload so listing returns exactly
    /// what the client saved; a few columns are projected out for queries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails, including
    /// when the (user, recipe) pair already exists
    pub async fn save_favorite(&self, user_id: Uuid, recipe: &Recipe) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let payload =
            serde_json::to_string(recipe).context("failed to serialize recipe payload")?;

        sqlx::query(
            r"
            INSERT INTO favorite_recipes (
                id, user_id, recipe_id, title, image,
                ready_in_minutes, servings, has_onion_garlic, payload, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.image)
        .bind(recipe.ready_in_minutes)
        .bind(recipe.servings)
        .bind(recipe.has_onion_garlic)
        .bind(&payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// List a user's favorite recipes in the order they were saved
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored payload cannot be
    /// deserialized
    pub async fn get_favorites(&self, user_id: Uuid) -> Result<Vec<Recipe>> {
        let rows = sqlx::query(
            "SELECT payload FROM favorite_recipes WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let payload: String = row.get("payload");
                serde_json::from_str(&payload).context("corrupt favorite recipe payload")
            })
            .collect()
    }

    /// Remove one favorite; returns whether a row was deleted
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn remove_favorite(&self, user_id: Uuid, recipe_id: i64) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM favorite_recipes WHERE user_id = $1 AND recipe_id = $2")
                .bind(user_id.to_string())
                .bind(recipe_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
