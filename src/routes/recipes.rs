// ABOUTME: Recipe route handlers for search, favorites, custom recipes, and sharing
// ABOUTME: Provides REST endpoints over the search orchestration and recipe storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Recipe routes for search and saved-recipe management
//!
//! Search is public and delegates to the tiered orchestration in
//! [`crate::services::search`]. Favorites, custom recipes, and share
//! creation require a bearer token; fetching a shared recipe by token
//! is public by design.

use super::auth::authenticate;
use crate::server::ServerResources;
use crate::services::{custom, search};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use pantry_core::{
    models::{CategorizedRecipes, CustomRecipe, Recipe},
    AppError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Recipe search request
///
/// `ingredients` is comma-separated text, matching what the original web
/// client sends.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Comma-separated ingredient list, at least two entries
    pub ingredients: String,
    /// Requested result count, defaults to 100
    #[serde(default)]
    pub number: Option<u32>,
    /// Optional cuisine filter passed through to the provider
    #[serde(default)]
    pub cuisine: Option<String>,
}

/// List of saved recipes, favorites or custom
#[derive(Debug, Serialize)]
pub struct RecipeListResponse<T> {
    /// The saved recipes, newest last
    pub recipes: Vec<T>,
}

/// Custom recipe creation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomRecipeRequest {
    /// Display title
    pub title: String,
    /// Ingredient list, at least two non-empty entries
    pub ingredients: Vec<String>,
    /// Preparation steps, at least one non-empty entry
    pub instructions: Vec<String>,
    /// Number of servings; the original client defaults to 4
    #[serde(default = "default_servings")]
    pub servings: i32,
    /// Total time in minutes; defaults like an ingested provider recipe
    #[serde(default = "default_ready_in_minutes")]
    pub ready_in_minutes: i32,
}

const fn default_servings() -> i32 {
    4
}

const fn default_ready_in_minutes() -> i32 {
    30
}

/// Share creation response
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Opaque token addressing the shared payload
    pub token: String,
}

/// Generic message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/search", post(Self::search))
            .route("/api/recipes/favorites", get(Self::list_favorites))
            .route("/api/recipes/favorites", post(Self::save_favorite))
            .route(
                "/api/recipes/remove-favorite/:recipe_id",
                delete(Self::remove_favorite),
            )
            .route("/api/recipes/custom", get(Self::list_custom))
            .route("/api/recipes/custom", post(Self::create_custom))
            .route("/api/recipes/custom/:recipe_id", delete(Self::delete_custom))
            .route("/api/recipes/share", post(Self::share_recipe))
            .route("/api/recipes/shared/:token", get(Self::get_shared))
            .with_state(resources)
    }

    async fn search(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SearchRequest>,
    ) -> Result<Json<CategorizedRecipes>, AppError> {
        let number = request.number.unwrap_or(search::DEFAULT_SEARCH_NUMBER);
        let categorized = search::search_recipes(
            resources.recipe_api.as_deref(),
            resources.llm.as_deref(),
            &request.ingredients,
            number,
            request.cuisine.as_deref(),
        )
        .await?;

        Ok(Json(categorized))
    }

    async fn list_favorites(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<RecipeListResponse<Recipe>>, AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let recipes = resources
            .database
            .get_favorites(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(RecipeListResponse { recipes }))
    }

    async fn save_favorite(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(recipe): Json<Recipe>,
    ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let exists = resources
            .database
            .favorite_exists(user_id, recipe.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if exists {
            return Err(AppError::already_exists("favorite for this recipe"));
        }

        resources
            .database
            .save_favorite(user_id, &recipe)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!("favorite saved for {user_id}: recipe {}", recipe.id);
        Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Recipe saved to favorites".to_owned(),
            }),
        ))
    }

    async fn remove_favorite(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<i64>,
    ) -> Result<Json<MessageResponse>, AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let removed = resources
            .database
            .remove_favorite(user_id, recipe_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if !removed {
            return Err(AppError::not_found("favorite"));
        }

        Ok(Json(MessageResponse {
            message: "Recipe removed from favorites".to_owned(),
        }))
    }

    async fn list_custom(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<RecipeListResponse<CustomRecipe>>, AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let recipes = resources
            .database
            .get_custom_recipes(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(RecipeListResponse { recipes }))
    }

    async fn create_custom(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateCustomRecipeRequest>,
    ) -> Result<(StatusCode, Json<CustomRecipe>), AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let title = request.title.trim().to_owned();
        if title.is_empty() {
            return Err(AppError::missing_field("title"));
        }

        let ingredients: Vec<String> = request
            .ingredients
            .iter()
            .map(|entry| entry.trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .collect();
        if ingredients.len() < 2 {
            return Err(AppError::invalid_input(
                "Please provide at least 2 ingredients",
            ));
        }

        let instructions: Vec<String> = request
            .instructions
            .iter()
            .map(|entry| entry.trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .collect();
        if instructions.is_empty() {
            return Err(AppError::invalid_input(
                "Please provide at least 1 instruction",
            ));
        }

        if request.servings < 1 {
            return Err(AppError::invalid_input("Servings must be at least 1"));
        }

        let recipe = custom::build_custom_recipe(
            resources.llm.as_deref(),
            user_id,
            title,
            ingredients,
            instructions,
            request.ready_in_minutes,
            request.servings,
        )
        .await;

        resources
            .database
            .save_custom_recipe(&recipe)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!("custom recipe created for {user_id}: {}", recipe.id);
        Ok((StatusCode::CREATED, Json(recipe)))
    }

    async fn delete_custom(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<uuid::Uuid>,
    ) -> Result<Json<MessageResponse>, AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let deleted = resources
            .database
            .delete_custom_recipe(user_id, recipe_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if !deleted {
            return Err(AppError::not_found("custom recipe"));
        }

        Ok(Json(MessageResponse {
            message: "Custom recipe deleted".to_owned(),
        }))
    }

    async fn share_recipe(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(recipe): Json<serde_json::Value>,
    ) -> Result<(StatusCode, Json<ShareResponse>), AppError> {
        let user_id = authenticate(&headers, &resources)?;

        if !recipe.is_object() {
            return Err(AppError::invalid_input("Shared recipe must be an object"));
        }

        let token = crate::auth::generate_secure_token();
        resources
            .database
            .save_shared_recipe(&token, user_id, &recipe)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!("recipe shared by {user_id}");
        Ok((StatusCode::CREATED, Json(ShareResponse { token })))
    }

    async fn get_shared(
        State(resources): State<Arc<ServerResources>>,
        Path(token): Path<String>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        let record = resources
            .database
            .get_shared_recipe(&token)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("shared recipe"))?;

        Ok(Json(serde_json::json!({
            "token": record.token,
            "recipe": record.recipe,
            "created_at": record.created_at.to_rfc3339(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_defaults_number_and_cuisine() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"ingredients": "chicken, rice"}"#).unwrap();
        assert_eq!(request.number, None);
        assert_eq!(request.cuisine, None);
        assert_eq!(request.ingredients, "chicken, rice");
    }

    #[test]
    fn custom_recipe_request_fills_defaults() {
        let request: CreateCustomRecipeRequest = serde_json::from_str(
            r#"{"title": "Toast", "ingredients": ["bread", "butter"], "instructions": ["Toast it."]}"#,
        )
        .unwrap();
        assert_eq!(request.servings, 4);
        assert_eq!(request.ready_in_minutes, 30);
    }

    #[test]
    fn custom_recipe_request_accepts_camel_case_time() {
        let request: CreateCustomRecipeRequest = serde_json::from_str(
            r#"{"title": "Stew", "ingredients": ["beef", "carrot"], "instructions": ["Simmer."], "readyInMinutes": 90, "servings": 6}"#,
        )
        .unwrap();
        assert_eq!(request.ready_in_minutes, 90);
        assert_eq!(request.servings, 6);
    }
}
