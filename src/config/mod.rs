// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven config for HTTP, database, auth, and external services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Configuration module for the Pantry recipe API
//!
//! Centralized configuration management for all components of the server:
//!
//! - **Environment**: server configuration from environment variables
//!   (HTTP port, database URL, JWT settings, CORS origins, and the
//!   credentials for the recipe provider and the LLM)

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
