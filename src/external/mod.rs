// ABOUTME: External API integrations for recipe data retrieval
// ABOUTME: Houses the upstream recipe provider client and its test mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! External API clients

pub mod recipe_api;

pub use recipe_api::{MockRecipeApiClient, RecipeApiClient, RecipeSearch};
