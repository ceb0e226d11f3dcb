// ABOUTME: Centralized resource container for dependency injection across route handlers
// ABOUTME: Holds the database, auth manager, and optional external service tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Route handlers
//! share one `Arc<ServerResources>` instead of recreating expensive objects
//! like the auth manager or the provider client per request.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::external::{RecipeApiClient, RecipeSearch};
use crate::llm::{LlmProvider, OpenAiCompatibleProvider};
use std::sync::Arc;
use tracing::info;

/// Centralized resource container for dependency injection
///
/// The external tiers are optional: a missing provider key leaves
/// `recipe_api` as `None` and search falls through to the later tiers,
/// and a missing LLM key disables synthesis the same way.
pub struct ServerResources {
    /// Database connection shared by all handlers
    pub database: Database,
    /// JWT issuing and validation
    pub auth_manager: AuthManager,
    /// Recipe provider tier, `None` when no API key is configured
    pub recipe_api: Option<Arc<dyn RecipeSearch>>,
    /// LLM synthesis tier, `None` when no API key is configured
    pub llm: Option<Arc<dyn LlmProvider>>,
    /// Full server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble resources from configuration, constructing the external
    /// tiers only when their keys are present
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: ServerConfig) -> Self {
        let recipe_api: Option<Arc<dyn RecipeSearch>> = if config.recipe_api.is_enabled() {
            info!(base_url = %config.recipe_api.base_url, "recipe provider tier enabled");
            Some(Arc::new(RecipeApiClient::new(config.recipe_api.clone())))
        } else {
            info!("recipe provider tier disabled, no API key configured");
            None
        };

        let llm: Option<Arc<dyn LlmProvider>> = if config.llm.is_enabled() {
            info!(base_url = %config.llm.base_url, model = %config.llm.model, "LLM synthesis tier enabled");
            Some(Arc::new(OpenAiCompatibleProvider::new(config.llm.clone())))
        } else {
            info!("LLM synthesis tier disabled, no API key configured");
            None
        };

        Self {
            database,
            auth_manager,
            recipe_api,
            llm,
            config,
        }
    }

    /// Replace the recipe provider tier, used by tests to inject mocks
    #[must_use]
    pub fn with_recipe_api(mut self, client: Arc<dyn RecipeSearch>) -> Self {
        self.recipe_api = Some(client);
        self
    }

    /// Replace the LLM tier, used by tests to inject mocks
    #[must_use]
    pub fn with_llm(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(provider);
        self
    }
}
