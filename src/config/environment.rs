// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Environment-based configuration management for production deployment

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default SQLite database URL when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/pantry.db";

/// Default JWT expiry when `JWT_EXPIRY_HOURS` is unset
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default base URL of the recipe provider
pub const DEFAULT_RECIPE_API_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Default request timeout for the recipe provider
pub const DEFAULT_RECIPE_API_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the OpenAI-compatible LLM endpoint
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model name for LLM recipe synthesis
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

// Development-only fallback; from_env refuses it in production.
const DEV_JWT_SECRET: &str = "pantry-dev-secret-not-for-production";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback for unrecognized values
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, `sqlite:` or `sqlite::memory:` style
    pub url: String,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for JWTs
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

/// Recipe provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeApiConfig {
    /// Base URL of the provider, without the trailing `/complexSearch`
    pub base_url: String,
    /// Provider API key; `None` disables the provider entirely
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl RecipeApiConfig {
    /// Provider is usable only when a key is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// OpenAI-compatible LLM endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Base URL, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// API key; `None` disables LLM synthesis
    pub api_key: Option<String>,
    /// Model name sent with every chat completion
    pub model: String,
}

impl LlmSettings {
    /// LLM synthesis is usable only when a key is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port the server binds
    pub http_port: u16,
    /// Log verbosity
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// JWT settings
    pub auth: AuthConfig,
    /// Allowed CORS origins; `["*"]` means any
    pub cors_origins: Vec<String>,
    /// Recipe provider settings
    pub recipe_api: RecipeApiConfig,
    /// LLM settings
    pub llm: LlmSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable fails to parse or when
    /// `JWT_SECRET` is missing in a production environment.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "")?);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment.is_production() => {
                bail!("JWT_SECRET must be set in production")
            }
            _ => {
                warn!("JWT_SECRET not set, using development fallback");
                DEV_JWT_SECRET.to_owned()
            }
        };

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")?),
            environment,
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL)?,
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &DEFAULT_JWT_EXPIRY_HOURS.to_string(),
                )?
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")?),
            recipe_api: RecipeApiConfig {
                base_url: env_var_or("RECIPE_API_BASE_URL", DEFAULT_RECIPE_API_BASE_URL)?,
                api_key: optional_env("RECIPE_API_KEY"),
                timeout_secs: env_var_or(
                    "RECIPE_API_TIMEOUT_SECS",
                    &DEFAULT_RECIPE_API_TIMEOUT_SECS.to_string(),
                )?
                .parse()
                .context("Invalid RECIPE_API_TIMEOUT_SECS value")?,
            },
            llm: LlmSettings {
                base_url: env_var_or("LLM_BASE_URL", DEFAULT_LLM_BASE_URL)?,
                api_key: optional_env("LLM_API_KEY"),
                model: env_var_or("LLM_MODEL", DEFAULT_LLM_MODEL)?,
            },
        };

        info!(
            port = config.http_port,
            environment = %config.environment,
            provider_enabled = config.recipe_api.is_enabled(),
            llm_enabled = config.llm.is_enabled(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// A fixed configuration for tests: in-memory database, both external
    /// services disabled, short-lived tokens.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            log_level: LogLevel::Warn,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_owned(),
            },
            auth: AuthConfig {
                jwt_secret: "test-secret".to_owned(),
                jwt_expiry_hours: 1,
            },
            cors_origins: vec!["*".to_owned()],
            recipe_api: RecipeApiConfig {
                base_url: DEFAULT_RECIPE_API_BASE_URL.to_owned(),
                api_key: None,
                timeout_secs: 5,
            },
            llm: LlmSettings {
                base_url: DEFAULT_LLM_BASE_URL.to_owned(),
                api_key: None,
                model: DEFAULT_LLM_MODEL.to_owned(),
            },
        }
    }
}

fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}

/// Empty or missing variables become `None`
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse comma-separated origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(|origin| origin.trim().to_owned())
        .filter(|origin| !origin.is_empty())
        .collect()
}
