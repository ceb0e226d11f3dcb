// ABOUTME: Status check route handlers for client liveness pings
// ABOUTME: Persists named pings and lists the most recent ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Status check routes
//!
//! Clients post a name to record a liveness ping and can list recent
//! pings back. Both endpoints are public.

use crate::server::ServerResources;
use axum::{extract::State, routing::post, Json, Router};
use pantry_core::{models::StatusCheck, AppError};
use serde::Deserialize;
use std::sync::Arc;

/// Status check creation request
#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    /// Free-text name the client reports
    pub client_name: String,
}

/// Status check routes implementation
pub struct StatusRoutes;

impl StatusRoutes {
    /// Create all status check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/status",
                post(Self::create_status).get(Self::list_status),
            )
            .with_state(resources)
    }

    async fn create_status(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<StatusCheckCreate>,
    ) -> Result<Json<StatusCheck>, AppError> {
        if request.client_name.trim().is_empty() {
            return Err(AppError::missing_field("client_name"));
        }

        let check = StatusCheck::new(request.client_name);
        resources
            .database
            .create_status_check(&check)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(check))
    }

    async fn list_status(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<StatusCheck>>, AppError> {
        let checks = resources
            .database
            .get_status_checks()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(checks))
    }
}
