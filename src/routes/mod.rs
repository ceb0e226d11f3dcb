// ABOUTME: Route module organization for the Pantry Recipe API HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Route module for the Pantry Recipe API
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains route definitions and thin handler functions that delegate
//! to the service and database layers.

/// Authentication and account management routes
pub mod auth;
/// Health check and readiness routes
pub mod health;
/// Recipe search, favorites, custom recipes, and sharing routes
pub mod recipes;
/// Status check routes
pub mod status;

/// Authentication route handlers
pub use auth::AuthRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
/// Status check route handlers
pub use status::StatusRoutes;
