// ABOUTME: Prompt builders for recipe synthesis and nutrition estimation
// ABOUTME: System prompt loaded at compile time from a markdown file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Prompts
//!
//! Prompt text for the LLM tier. The system prompt is loaded at compile
//! time from a markdown file for easy maintenance; the user prompts are
//! built per request and pin the exact JSON schema the parser expects.

/// Recipe generator system prompt
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("recipe_system.md");

/// Get the system prompt for recipe generation
#[must_use]
pub const fn get_recipe_system_prompt() -> &'static str {
    RECIPE_SYSTEM_PROMPT
}

/// Build the user prompt asking for synthesized recipes
///
/// The schema omits the allium flag on purpose: it is always re-derived
/// from the ingredient text after parsing.
#[must_use]
pub fn recipe_synthesis_prompt(ingredients: &[String], number: u32, cuisine: Option<&str>) -> String {
    let cuisine_clause = cuisine.map_or_else(String::new, |c| format!(" {c}-style"));
    format!(
        r#"Generate {number}{cuisine_clause} recipes using these ingredients: {}.

Output a JSON array where each element has exactly this shape:
{{"id": 1, "title": "Recipe Name", "image": "", "readyInMinutes": 30, "servings": 2, "nutrition": {{"calories": 450, "protein": 20, "carbs": 50, "fat": 15, "fiber": 6}}, "ingredients": ["ingredient one", "ingredient two"], "instructions": ["Step one.", "Step two."]}}

Use a distinct numeric id per recipe and leave image empty. Vary readyInMinutes realistically across quick, medium, and slow dishes."#,
        ingredients.join(", ")
    )
}

/// Build the user prompt asking for a per-serving nutrition estimate
#[must_use]
pub fn nutrition_estimate_prompt(title: &str, ingredients: &[String], servings: i32) -> String {
    format!(
        r#"Estimate per-serving nutrition for the recipe "{title}" with {servings} servings, made from: {}.

Output a single JSON object with exactly this shape:
{{"calories": 450, "protein": 20, "carbs": 50, "fat": 15, "fiber": 6}}"#,
        ingredients.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesis_prompt_includes_ingredients_and_count() {
        let prompt =
            recipe_synthesis_prompt(&["chicken".to_owned(), "rice".to_owned()], 5, Some("asian"));
        assert!(prompt.contains("chicken, rice"));
        assert!(prompt.contains("Generate 5 asian-style recipes"));
        assert!(prompt.contains("readyInMinutes"));
    }

    #[test]
    fn synthesis_prompt_omits_missing_cuisine() {
        let prompt = recipe_synthesis_prompt(&["rice".to_owned()], 3, None);
        assert!(prompt.starts_with("Generate 3 recipes"));
    }

    #[test]
    fn nutrition_prompt_names_the_recipe() {
        let prompt = nutrition_estimate_prompt("Veggie Bowl", &["rice".to_owned()], 2);
        assert!(prompt.contains("\"Veggie Bowl\""));
        assert!(prompt.contains("2 servings"));
    }
}
