// ABOUTME: Production server binary for the Pantry Recipe API
// ABOUTME: Loads configuration, opens the database, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # Pantry Server Binary
//!
//! Starts the recipe API with JWT authentication, SQLite storage, and the
//! tiered search pipeline.

use anyhow::Result;
use clap::Parser;
use pantry_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry Recipe API - ingredient-based recipe search")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    // Load configuration from environment (also loads .env, so logging
    // initialization below sees any RUST_LOG it defines)
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Pantry Recipe API");

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    );
    info!("Authentication manager initialized");

    let resources = Arc::new(ServerResources::new(database, auth_manager, config));
    server::serve(resources).await
}
