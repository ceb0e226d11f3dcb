// ABOUTME: Custom recipe database operations
// ABOUTME: Stores user-authored recipes with JSON ingredient and instruction lists

use super::Database;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pantry_core::models::{CustomRecipe, RecipeNutrition};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the custom recipes table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_custom_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS custom_recipes (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                title TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                instructions TEXT NOT NULL,
                ready_in_minutes INTEGER NOT NULL,
                servings INTEGER NOT NULL,
                calories REAL NOT NULL,
                protein REAL NOT NULL,
                carbs REAL NOT NULL,
                fat REAL NOT NULL,
                fiber REAL NOT NULL,
                has_onion_garlic BOOLEAN NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_custom_recipes_user ON custom_recipes(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a custom recipe
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn save_custom_recipe(&self, recipe: &CustomRecipe) -> Result<Uuid> {
        let ingredients = serde_json::to_string(&recipe.ingredients)
            .context("failed to serialize ingredient list")?;
        let instructions = serde_json::to_string(&recipe.instructions)
            .context("failed to serialize instruction list")?;

        sqlx::query(
            r"
            INSERT INTO custom_recipes (
                id, user_id, title, ingredients, instructions,
                ready_in_minutes, servings,
                calories, protein, carbs, fat, fiber,
                has_onion_garlic, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(recipe.user_id.to_string())
        .bind(&recipe.title)
        .bind(&ingredients)
        .bind(&instructions)
        .bind(recipe.ready_in_minutes)
        .bind(recipe.servings)
        .bind(recipe.nutrition.calories)
        .bind(recipe.nutrition.protein)
        .bind(recipe.nutrition.carbs)
        .bind(recipe.nutrition.fat)
        .bind(recipe.nutrition.fiber)
        .bind(recipe.has_onion_garlic)
        .bind(recipe.created_at)
        .execute(&self.pool)
        .await?;

        Ok(recipe.id)
    }

    /// List a user's custom recipes in creation order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded
    pub async fn get_custom_recipes(&self, user_id: Uuid) -> Result<Vec<CustomRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, title, ingredients, instructions,
                   ready_in_minutes, servings,
                   calories, protein, carbs, fat, fiber,
                   has_onion_garlic, created_at
            FROM custom_recipes WHERE user_id = $1 ORDER BY created_at
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_custom_recipe).collect()
    }

    /// Delete one custom recipe owned by the user; returns whether a row
    /// was deleted
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_custom_recipe(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM custom_recipes WHERE user_id = $1 AND id = $2")
            .bind(user_id.to_string())
            .bind(recipe_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Convert a database row to a `CustomRecipe`
    fn row_to_custom_recipe(row: &sqlx::sqlite::SqliteRow) -> Result<CustomRecipe> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let ingredients: String = row.get("ingredients");
        let instructions: String = row.get("instructions");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(CustomRecipe {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            title: row.get("title"),
            ingredients: serde_json::from_str(&ingredients)
                .context("corrupt ingredient list")?,
            instructions: serde_json::from_str(&instructions)
                .context("corrupt instruction list")?,
            ready_in_minutes: row.get("ready_in_minutes"),
            servings: row.get("servings"),
            nutrition: RecipeNutrition {
                calories: row.get("calories"),
                protein: row.get("protein"),
                carbs: row.get("carbs"),
                fat: row.get("fat"),
                fiber: row.get("fiber"),
            },
            has_onion_garlic: row.get("has_onion_garlic"),
            created_at,
        })
    }
}
