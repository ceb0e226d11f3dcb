// ABOUTME: Custom recipe assembly from user input
// ABOUTME: Derives the allium flag and estimates nutrition via the LLM when available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Custom Recipe Assembly
//!
//! Builds a [`CustomRecipe`] from validated user input. The allium flag is
//! always derived from the submitted ingredient list. Nutrition comes from
//! the LLM when one is configured; estimation failures zero the values
//! rather than failing the save.

use super::search::{extract_json_span, LlmNutrition};
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use pantry_core::models::{CustomRecipe, RecipeNutrition};
use pantry_engine::contains_allium;
use tracing::{debug, warn};
use uuid::Uuid;

/// Sampling temperature for nutrition estimates; low, the task is factual
const ESTIMATE_TEMPERATURE: f32 = 0.1;

/// Assemble a custom recipe from validated input
pub async fn build_custom_recipe(
    llm: Option<&dyn LlmProvider>,
    user_id: Uuid,
    title: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    ready_in_minutes: i32,
    servings: i32,
) -> CustomRecipe {
    let has_onion_garlic = contains_allium(ingredients.iter().map(String::as_str));

    let nutrition = match llm {
        Some(provider) => estimate_nutrition(provider, &title, &ingredients, servings)
            .await
            .unwrap_or_else(|| {
                warn!("nutrition estimate unavailable for custom recipe, zeroing values");
                RecipeNutrition::default()
            }),
        None => RecipeNutrition::default(),
    };

    CustomRecipe {
        id: Uuid::new_v4(),
        user_id,
        title,
        ingredients,
        instructions,
        ready_in_minutes,
        servings,
        nutrition,
        has_onion_garlic,
        created_at: chrono::Utc::now(),
    }
}

/// Ask the LLM for a per-serving nutrition estimate
async fn estimate_nutrition(
    provider: &dyn LlmProvider,
    title: &str,
    ingredients: &[String],
    servings: i32,
) -> Option<RecipeNutrition> {
    let request = ChatRequest::new(vec![
        ChatMessage::system(prompts::get_recipe_system_prompt()),
        ChatMessage::user(prompts::nutrition_estimate_prompt(title, ingredients, servings)),
    ])
    .with_temperature(ESTIMATE_TEMPERATURE);

    let response = match provider.complete(&request).await {
        Ok(response) => response,
        Err(error) => {
            warn!("nutrition estimate request failed: {error}");
            return None;
        }
    };

    let span = extract_json_span(&response.content, '{', '}')?;
    match serde_json::from_str::<LlmNutrition>(span) {
        Ok(estimate) => {
            debug!("nutrition estimated for {title}");
            Some(estimate.into())
        }
        Err(error) => {
            warn!("nutrition estimate was not valid JSON: {error}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn flag_is_derived_without_llm() {
        let recipe = build_custom_recipe(
            None,
            Uuid::new_v4(),
            "Garlic Bread".to_owned(),
            vec!["bread".to_owned(), "garlic butter".to_owned()],
            vec!["Toast.".to_owned()],
            10,
            4,
        )
        .await;
        assert!(recipe.has_onion_garlic);
        assert_eq!(recipe.nutrition, RecipeNutrition::default());
    }

    #[tokio::test]
    async fn clean_ingredients_stay_unflagged() {
        let recipe = build_custom_recipe(
            None,
            Uuid::new_v4(),
            "Fruit Salad".to_owned(),
            vec!["apple".to_owned(), "banana".to_owned()],
            vec!["Chop.".to_owned(), "Mix.".to_owned()],
            5,
            2,
        )
        .await;
        assert!(!recipe.has_onion_garlic);
        assert_eq!(recipe.instructions.len(), 2);
    }
}
