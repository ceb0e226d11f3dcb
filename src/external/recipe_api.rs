// ABOUTME: Upstream recipe provider client for ingredient-based search
// ABOUTME: Implements complexSearch calls, response ingestion, caching, and rate limiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Recipe provider API client
//!
//! Client for a Spoonacular-compatible recipe search API. Responses are
//! mapped into [`Recipe`] values at this boundary: nutrition is extracted
//! from the provider's nutrient list by name, the allium flag is re-derived
//! from the ingredient text, and missing fields fall back to fixed defaults.
//! Results are cached briefly and requests are rate limited.

use crate::config::environment::RecipeApiConfig;
use async_trait::async_trait;
use pantry_core::{AppError, Recipe, RecipeNutrition};
use pantry_engine::is_allium;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Title used when the provider omits one
const FALLBACK_TITLE: &str = "Unknown Recipe";
/// Ready-time used when the provider omits one
const DEFAULT_READY_MINUTES: i32 = 30;
/// Servings used when the provider omits them
const DEFAULT_SERVINGS: i32 = 1;
/// How long search results stay cached
const SEARCH_CACHE_TTL_SECS: u64 = 600;
/// Upstream request budget per minute
const RATE_LIMIT_PER_MINUTE: u32 = 60;

/// Ingredient-based recipe search, implemented by the real provider client
/// and by mocks in tests
#[async_trait]
pub trait RecipeSearch: Send + Sync {
    /// Search for recipes that use the given ingredients
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream call fails; `QUOTA_EXCEEDED`
    /// signals provider quota exhaustion (HTTP 402) and callers fall back
    async fn search(
        &self,
        ingredients: &[String],
        number: u32,
        cuisine: Option<&str>,
    ) -> Result<Vec<Recipe>, AppError>;
}

/// Provider search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ProviderRecipe>,
}

/// One recipe as the provider returns it; every field is optional because
/// upstream payloads are not trusted to be complete
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProviderRecipe {
    id: Option<i64>,
    title: Option<String>,
    image: Option<String>,
    ready_in_minutes: Option<i32>,
    servings: Option<i32>,
    nutrition: Option<ProviderNutrition>,
    extended_ingredients: Vec<ProviderIngredient>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderNutrition {
    nutrients: Vec<ProviderNutrient>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderNutrient {
    name: String,
    amount: f64,
}

/// A provider ingredient carries both a canonical name and the original
/// free text; allium detection runs over both
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderIngredient {
    name: String,
    original: String,
}

/// Extract the tracked nutrients from the provider's nutrient list
///
/// Matching is by lowercased substring, first branch wins per nutrient,
/// and later list entries overwrite earlier ones. "Saturated Fat" must not
/// land in the fat slot.
fn extract_nutrition(nutrients: &[ProviderNutrient]) -> RecipeNutrition {
    let mut nutrition = RecipeNutrition::default();

    for nutrient in nutrients {
        let name = nutrient.name.to_lowercase();
        if name.contains("calorie") {
            nutrition.calories = nutrient.amount;
        } else if name.contains("protein") {
            nutrition.protein = nutrient.amount;
        } else if name.contains("carbohydrate") {
            nutrition.carbs = nutrient.amount;
        } else if name.contains("fat") && !name.contains("saturated") {
            nutrition.fat = nutrient.amount;
        } else if name.contains("fiber") {
            nutrition.fiber = nutrient.amount;
        }
    }

    nutrition
}

/// Map one provider recipe into the service's [`Recipe`] shape
fn ingest_recipe(raw: ProviderRecipe) -> Recipe {
    let nutrition = raw
        .nutrition
        .map_or_else(RecipeNutrition::default, |n| extract_nutrition(&n.nutrients));

    // The allium flag is never trusted from upstream; it is derived from
    // both the canonical name and the original ingredient text.
    let has_onion_garlic = raw
        .extended_ingredients
        .iter()
        .any(|ing| is_allium(&ing.name) || is_allium(&ing.original));

    let ingredients = raw
        .extended_ingredients
        .into_iter()
        .map(|ing| ing.name)
        .collect();

    Recipe {
        id: raw.id.unwrap_or(0),
        title: raw.title.unwrap_or_else(|| FALLBACK_TITLE.to_owned()),
        image: raw.image.unwrap_or_default(),
        ready_in_minutes: raw.ready_in_minutes.unwrap_or(DEFAULT_READY_MINUTES),
        servings: raw.servings.unwrap_or(DEFAULT_SERVINGS),
        nutrition,
        has_onion_garlic,
        ingredients,
        instructions: Vec::new(),
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// Rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Check if a request can be made, removing expired entries
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    /// Record a new request
    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    /// Wait until a request can be made
    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// Recipe provider API client
pub struct RecipeApiClient {
    config: RecipeApiConfig,
    http_client: reqwest::Client,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<Vec<Recipe>>>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl RecipeApiClient {
    /// Create a new provider client
    #[must_use]
    pub fn new(config: RecipeApiConfig) -> Self {
        let rate_limiter = RateLimiter::new(RATE_LIMIT_PER_MINUTE, Duration::from_secs(60));

        Self {
            config,
            http_client: reqwest::Client::new(),
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        }
    }

    /// Clear the search cache (useful for testing)
    pub async fn clear_cache(&self) {
        self.search_cache.write().await.clear();
    }
}

#[async_trait]
impl RecipeSearch for RecipeApiClient {
    async fn search(
        &self,
        ingredients: &[String],
        number: u32,
        cuisine: Option<&str>,
    ) -> Result<Vec<Recipe>, AppError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::external_unavailable(
                "Recipe provider is not configured",
            ));
        };

        let joined = ingredients.join(",");
        let cache_key = format!("{joined}|{number}|{}", cuisine.unwrap_or(""));

        // Check cache first
        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    tracing::debug!("recipe search cache hit for {joined}");
                    return Ok(entry.data.clone());
                }
            }
        }

        // Wait for rate limit if needed
        {
            let mut limiter = self.rate_limiter.write().await;
            limiter.wait_if_needed().await;
            limiter.record_request();
        }

        let mut params = vec![
            ("apiKey", api_key.to_owned()),
            ("includeIngredients", joined.clone()),
            ("number", number.to_string()),
            ("addRecipeInformation", "true".to_owned()),
            ("addRecipeNutrition", "true".to_owned()),
            ("fillIngredients", "true".to_owned()),
            ("sort", "max-used-ingredients".to_owned()),
            ("ranking", "2".to_owned()),
        ];
        if let Some(cuisine) = cuisine {
            params.push(("cuisine", cuisine.to_owned()));
        }

        let url = format!("{}/complexSearch", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::external_timeout(format!(
                        "Recipe provider timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    AppError::external_service(format!("Recipe provider request failed: {e}"))
                }
            })?;

        if response.status() == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(AppError::quota_exceeded(
                "Recipe provider quota exhausted for today",
            ));
        }

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Recipe provider returned HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Recipe provider JSON parse error: {e}"))
        })?;

        let recipes: Vec<Recipe> = search_response
            .results
            .into_iter()
            .map(ingest_recipe)
            .collect();

        tracing::info!(
            "recipe provider returned {} recipes for {joined}",
            recipes.len()
        );

        // Cache the results
        {
            let mut cache = self.search_cache.write().await;
            cache.insert(
                cache_key,
                CacheEntry {
                    data: recipes.clone(),
                    expires_at: Instant::now() + Duration::from_secs(SEARCH_CACHE_TTL_SECS),
                },
            );
        }

        Ok(recipes)
    }
}

/// Mock recipe provider for testing (no API calls)
pub struct MockRecipeApiClient {
    recipes: Vec<Recipe>,
    failure: Option<AppError>,
}

impl MockRecipeApiClient {
    /// Mock that returns the given recipes
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            failure: None,
        }
    }

    /// Mock that fails every search with the given error
    #[must_use]
    pub fn with_failure(failure: AppError) -> Self {
        Self {
            recipes: Vec::new(),
            failure: Some(failure),
        }
    }
}

#[async_trait]
impl RecipeSearch for MockRecipeApiClient {
    async fn search(
        &self,
        _ingredients: &[String],
        number: u32,
        _cuisine: Option<&str>,
    ) -> Result<Vec<Recipe>, AppError> {
        if let Some(failure) = &self.failure {
            return Err(AppError::new(failure.code, failure.message.clone()));
        }
        Ok(self.recipes.iter().take(number as usize).cloned().collect())
    }
}
