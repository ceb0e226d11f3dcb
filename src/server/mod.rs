// ABOUTME: HTTP server assembly, CORS configuration, and lifecycle management
// ABOUTME: Merges all route groups into one router and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! # HTTP Server Module
//!
//! Centralizes router assembly and server lifecycle. Route groups are
//! built per domain and merged here, behind shared CORS and request
//! tracing layers. Shutdown is graceful on Ctrl+C or SIGTERM.

pub mod resources;

pub use resources::ServerResources;

use crate::routes::{AuthRoutes, HealthRoutes, RecipeRoutes, StatusRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the complete application router
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors_origins);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(StatusRoutes::routes(resources.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Configure CORS from the allowed-origin list
///
/// An empty list or a `"*"` entry allows any origin; otherwise only the
/// listed origins are permitted. Origins that fail header parsing are
/// skipped rather than aborting startup.
pub fn setup_cors(cors_origins: &[String]) -> CorsLayer {
    let allow_origin = if cors_origins.is_empty() || cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            // Fallback to any if parsing failed
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Bind the configured port and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error when the port cannot be bound or the server
/// terminates abnormally.
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let app = router(&resources);
    let address = format!("0.0.0.0:{}", resources.config.http_port);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("HTTP server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated abnormally")?;

    info!("server shut down cleanly");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!("failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
