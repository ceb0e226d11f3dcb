// ABOUTME: Recipe search orchestration with a three-tier fallback chain
// ABOUTME: Provider first, then LLM synthesis, then the built-in sample catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Search Orchestration
//!
//! Runs an ingredient search through up to three tiers:
//!
//! 1. The upstream recipe provider, when configured.
//! 2. LLM synthesis, when configured, after provider quota exhaustion,
//!    disablement, or non-timeout failure.
//! 3. The built-in sample catalog, which always produces results.
//!
//! Provider timeouts are the one failure that surfaces to the caller: the
//! client already waited the full timeout budget, so stacking fallback
//! latency on top would be worse than an honest 504.

use crate::external::RecipeSearch;
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use pantry_core::{AppError, AppResult, CategorizedRecipes, ErrorCode, Recipe, RecipeNutrition};
use pantry_engine::{categorize, contains_allium, synthesize, SAMPLE_CATALOG};
use serde::Deserialize;
use tracing::{info, warn};

/// Default number of recipes requested upstream
pub const DEFAULT_SEARCH_NUMBER: u32 = 100;
/// Upper bound on the requested recipe count
pub const MAX_SEARCH_NUMBER: u32 = 100;
/// Minimum non-empty ingredient segments per search
pub const MIN_SEARCH_INGREDIENTS: usize = 2;
/// Sampling temperature for recipe synthesis
const SYNTHESIS_TEMPERATURE: f32 = 0.4;

/// Ready-time used when the LLM omits one
const DEFAULT_READY_MINUTES: i32 = 30;
/// Servings used when the LLM omits them
const DEFAULT_SERVINGS: i32 = 1;

/// Split a raw comma-separated ingredient string into trimmed segments,
/// dropping empties
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Run an ingredient search through the fallback chain and categorize the
/// result
///
/// # Errors
///
/// Returns `INVALID_INPUT` for fewer than two non-empty ingredients and
/// `EXTERNAL_TIMEOUT` when the provider times out; every other upstream
/// failure degrades to the next tier.
pub async fn search_recipes(
    recipe_api: Option<&dyn RecipeSearch>,
    llm: Option<&dyn LlmProvider>,
    raw_ingredients: &str,
    number: u32,
    cuisine: Option<&str>,
) -> AppResult<CategorizedRecipes> {
    let ingredients = parse_ingredient_list(raw_ingredients);
    if ingredients.len() < MIN_SEARCH_INGREDIENTS {
        return Err(AppError::invalid_input(format!(
            "Please provide at least {MIN_SEARCH_INGREDIENTS} ingredients"
        )));
    }
    let number = number.clamp(1, MAX_SEARCH_NUMBER);

    if let Some(provider) = recipe_api {
        match provider.search(&ingredients, number, cuisine).await {
            Ok(recipes) => {
                info!("search served by recipe provider ({} recipes)", recipes.len());
                return Ok(categorize(recipes));
            }
            Err(error) if error.code == ErrorCode::ExternalTimeout => return Err(error),
            Err(error) => {
                warn!("recipe provider unavailable ({error}), trying next tier");
            }
        }
    }

    if let Some(provider) = llm {
        match synthesize_with_llm(provider, &ingredients, number, cuisine).await {
            Ok(recipes) if !recipes.is_empty() => {
                info!("search served by LLM synthesis ({} recipes)", recipes.len());
                return Ok(categorize(recipes));
            }
            Ok(_) => info!("LLM synthesis produced no recipes, using sample catalog"),
            Err(error) => {
                warn!("LLM synthesis failed ({error}), using sample catalog");
            }
        }
    }

    let recipes = synthesize(raw_ingredients, SAMPLE_CATALOG);
    info!("search served by sample catalog ({} recipes)", recipes.len());
    Ok(categorize(recipes))
}

/// Ask the LLM for recipes and re-validate everything it returns
async fn synthesize_with_llm(
    provider: &dyn LlmProvider,
    ingredients: &[String],
    number: u32,
    cuisine: Option<&str>,
) -> AppResult<Vec<Recipe>> {
    let request = ChatRequest::new(vec![
        ChatMessage::system(prompts::get_recipe_system_prompt()),
        ChatMessage::user(prompts::recipe_synthesis_prompt(ingredients, number, cuisine)),
    ])
    .with_temperature(SYNTHESIS_TEMPERATURE);

    let response = provider.complete(&request).await?;
    let mut recipes = parse_llm_recipes(&response.content)?;
    recipes.truncate(number as usize);
    Ok(recipes)
}

/// Per-serving nutrition as the LLM emits it; tolerant of missing keys
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LlmNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl From<LlmNutrition> for RecipeNutrition {
    fn from(nutrition: LlmNutrition) -> Self {
        Self {
            calories: nutrition.calories,
            protein: nutrition.protein,
            carbs: nutrition.carbs,
            fat: nutrition.fat,
            fiber: nutrition.fiber,
        }
    }
}

/// One recipe as the LLM emits it; every field optional so a sloppy model
/// degrades instead of failing the whole batch
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LlmRecipe {
    id: Option<i64>,
    title: Option<String>,
    image: Option<String>,
    ready_in_minutes: Option<i32>,
    servings: Option<i32>,
    nutrition: Option<LlmNutrition>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

/// Slice the first JSON value of the given bracket kind out of LLM output
///
/// Models occasionally wrap JSON in code fences or prose despite
/// instructions; taking the outermost bracket span recovers those cases.
pub(crate) fn extract_json_span(content: &str, open: char, close: char) -> Option<&str> {
    let start = content.find(open)?;
    let end = content.rfind(close)?;
    (end >= start).then(|| &content[start..=end])
}

/// Parse LLM output into validated recipes
///
/// The allium flag is re-derived from the final ingredient list; nothing
/// the model claims about dietary content is trusted. Recipes without a
/// title or without ingredients are dropped.
fn parse_llm_recipes(content: &str) -> AppResult<Vec<Recipe>> {
    let span = extract_json_span(content, '[', ']')
        .ok_or_else(|| AppError::external_service("LLM output contained no JSON array"))?;

    let raw: Vec<LlmRecipe> = serde_json::from_str(span)
        .map_err(|e| AppError::external_service(format!("LLM output was not valid JSON: {e}")))?;

    let recipes = raw
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.filter(|t| !t.trim().is_empty())?;
            if entry.ingredients.is_empty() {
                return None;
            }
            let has_onion_garlic =
                contains_allium(entry.ingredients.iter().map(String::as_str));
            Some(Recipe {
                id: entry.id.unwrap_or(0),
                title,
                image: entry.image.unwrap_or_default(),
                ready_in_minutes: entry.ready_in_minutes.unwrap_or(DEFAULT_READY_MINUTES),
                servings: entry.servings.unwrap_or(DEFAULT_SERVINGS),
                nutrition: entry.nutrition.map(Into::into).unwrap_or_default(),
                has_onion_garlic,
                ingredients: entry.ingredients,
                instructions: entry.instructions,
            })
        })
        .collect();

    Ok(recipes)
}
