// ABOUTME: Core types for the Pantry recipe API platform
// ABOUTME: Foundation crate with the recipe data model and the error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types for the Pantry recipe API. This
//! crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **models**: The recipe data model (`Recipe`, `RecipeNutrition`, `CategorizedRecipes`, `User`)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (`Recipe`, `RecipeNutrition`, `CategorizedRecipes`, `TimeTier`, `User`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{
    CategorizedRecipes, CustomRecipe, DietaryBucket, Recipe, RecipeNutrition, StatusCheck,
    TierBuckets, TimeTier, User,
};
