// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Covers defaults, overrides, and the production JWT secret requirement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use pantry_server::config::environment::{
    ServerConfig, DEFAULT_DATABASE_URL, DEFAULT_HTTP_PORT, DEFAULT_JWT_EXPIRY_HOURS,
    DEFAULT_LLM_MODEL,
};
use pantry_server::config::{Environment, LogLevel};
use serial_test::serial;
use std::env;

/// Every variable `ServerConfig::from_env` reads
const CONFIG_VARS: &[&str] = &[
    "ENVIRONMENT",
    "HTTP_PORT",
    "LOG_LEVEL",
    "DATABASE_URL",
    "JWT_SECRET",
    "JWT_EXPIRY_HOURS",
    "CORS_ORIGINS",
    "RECIPE_API_BASE_URL",
    "RECIPE_API_KEY",
    "RECIPE_API_TIMEOUT_SECS",
    "LLM_BASE_URL",
    "LLM_API_KEY",
    "LLM_MODEL",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[tokio::test]
#[serial]
async fn test_from_env_defaults() -> Result<()> {
    common::init_test_logging();
    clear_config_env();

    let config = ServerConfig::from_env()?;

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.auth.jwt_expiry_hours, DEFAULT_JWT_EXPIRY_HOURS);
    assert_eq!(config.cors_origins, vec!["*".to_owned()]);
    assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);

    // No keys configured means both external tiers stay off
    assert!(!config.recipe_api.is_enabled());
    assert!(!config.llm.is_enabled());
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_from_env_reads_overrides() -> Result<()> {
    common::init_test_logging();
    clear_config_env();
    env::set_var("HTTP_PORT", "9100");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("DATABASE_URL", "sqlite:./custom.db");
    env::set_var("JWT_SECRET", "an-actual-secret");
    env::set_var("JWT_EXPIRY_HOURS", "72");
    env::set_var("CORS_ORIGINS", "http://localhost:3000, https://pantry.example.com");
    env::set_var("RECIPE_API_KEY", "provider-key");
    env::set_var("LLM_API_KEY", "llm-key");
    env::set_var("LLM_MODEL", "gpt-4o");

    let config = ServerConfig::from_env()?;
    clear_config_env();

    assert_eq!(config.http_port, 9100);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_string(), "debug");
    assert_eq!(config.database.url, "sqlite:./custom.db");
    assert_eq!(config.auth.jwt_secret, "an-actual-secret");
    assert_eq!(config.auth.jwt_expiry_hours, 72);
    assert_eq!(
        config.cors_origins,
        vec![
            "http://localhost:3000".to_owned(),
            "https://pantry.example.com".to_owned()
        ]
    );
    assert!(config.recipe_api.is_enabled());
    assert!(config.llm.is_enabled());
    assert_eq!(config.llm.model, "gpt-4o");
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_empty_api_keys_disable_the_tiers() -> Result<()> {
    common::init_test_logging();
    clear_config_env();
    env::set_var("RECIPE_API_KEY", "");
    env::set_var("LLM_API_KEY", "");

    let config = ServerConfig::from_env()?;
    clear_config_env();

    assert!(!config.recipe_api.is_enabled());
    assert!(!config.llm.is_enabled());
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_production_requires_jwt_secret() {
    common::init_test_logging();
    clear_config_env();
    env::set_var("ENVIRONMENT", "production");

    let result = ServerConfig::from_env();
    clear_config_env();

    let error = result.expect_err("production without JWT_SECRET must fail");
    assert!(error.to_string().contains("JWT_SECRET"));
}

#[tokio::test]
#[serial]
async fn test_invalid_numeric_values_are_rejected() {
    common::init_test_logging();
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}
