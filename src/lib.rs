// ABOUTME: Main library entry point for the Pantry Recipe API server
// ABOUTME: Provides ingredient-based recipe search with allium-aware categorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Pantry Server
//!
//! Backend for an ingredient-based recipe finder. Users submit a list of
//! pantry ingredients and receive recipes categorized by cooking time and
//! by whether they contain onion or garlic, for people who avoid alliums.
//!
//! ## Features
//!
//! - **Tiered search**: an upstream recipe provider, an LLM synthesis
//!   fallback, and a built-in sample catalog, tried in that order
//! - **Allium detection**: the flag on every recipe is derived locally
//!   from its ingredient list, never trusted from upstream
//! - **Accounts**: JWT-authenticated favorites, custom recipes, and
//!   recipe sharing backed by `SQLite`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_server::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication and session management
pub mod auth;

/// Configuration management
pub mod config;

/// User and recipe storage on `SQLite`
pub mod database;

/// External recipe provider client
pub mod external;

/// LLM provider abstraction for recipe synthesis
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// `HTTP` routes organized by domain
pub mod routes;

/// `HTTP` server assembly and lifecycle
pub mod server;

/// Search orchestration and custom recipe assembly
pub mod services;

pub use pantry_core::{AppError, AppResult, ErrorCode};
