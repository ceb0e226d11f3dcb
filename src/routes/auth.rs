// ABOUTME: User authentication route handlers for registration, login, and account management
// ABOUTME: Provides REST endpoints for JWT issuance, password resets, and account deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Authentication routes for user management
//!
//! This module handles registration, login, token refresh, the password
//! reset flow, and account deletion. Handlers are thin wrappers around
//! the auth manager and the database layer.

use crate::auth;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{delete, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use pantry_core::{models::User, AppError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reset tokens expire after this many hours
const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// User registration request
///
/// `name` is accepted as an alias because the original web client sends
/// the display name under that key.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Optional display name
    #[serde(default, alias = "name")]
    pub display_name: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Token plus account payload returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Signed JWT for subsequent requests
    pub token: String,
    /// The account, without its password hash
    pub user: User,
}

/// Token refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    /// The unexpired token to re-issue
    pub token: String,
}

/// Refreshed token response
#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    /// The re-issued JWT
    pub token: String,
}

/// Forgot-password request
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Email of the account to reset
    pub email: String,
}

/// Reset-password request
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    /// The reset token from the forgot-password email
    pub token: String,
    /// Replacement password
    pub new_password: String,
}

/// Account deletion request; the password is re-verified before deletion
#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    /// Current account password
    pub password: String,
}

/// Generic message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::register))
            .route("/api/auth/login", post(Self::login))
            .route("/api/auth/refresh", post(Self::refresh))
            .route("/api/auth/forgot-password", post(Self::forgot_password))
            .route("/api/auth/reset-password", post(Self::reset_password))
            .route("/api/auth/delete-account", delete(Self::delete_account))
            .with_state(resources)
    }

    /// Simple email validation
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        if email.len() <= 5 {
            return false;
        }
        let Some(at_pos) = email.find('@') else {
            return false;
        };
        if at_pos == 0 || at_pos == email.len() - 1 {
            return false; // @ at start or end
        }
        let domain_part = &email[at_pos + 1..];
        domain_part.contains('.')
    }

    /// Validate password strength
    #[must_use]
    pub const fn is_valid_password(password: &str) -> bool {
        password.len() >= MIN_PASSWORD_LENGTH
    }

    async fn register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
        info!("registration attempt for {}", request.email);

        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email address format"));
        }
        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let existing = resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if existing.is_some() {
            return Err(AppError::already_exists("account with this email"));
        }

        let password_hash = auth::hash_password(&request.password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        let display_name = request
            .display_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        let user = User::new(request.email, password_hash, display_name);

        resources
            .database
            .create_user(&user)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let token = resources
            .auth_manager
            .generate_token(&user)
            .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

        info!("user registered: {} ({})", user.email, user.id);
        Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
    }

    async fn login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Json<AuthResponse>, AppError> {
        info!("login attempt for {}", request.email);

        let user = resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::auth_invalid("Invalid email or password"))?;

        let valid = auth::verify_password(request.password, user.password_hash.clone())
            .await
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
        if !valid {
            warn!("invalid password for {}", request.email);
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        let token = resources
            .auth_manager
            .generate_token(&user)
            .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

        info!("user logged in: {}", user.id);
        Ok(Json(AuthResponse { token, user }))
    }

    async fn refresh(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RefreshTokenRequest>,
    ) -> Result<Json<RefreshTokenResponse>, AppError> {
        let token = resources.auth_manager.refresh_token(&request.token)?;
        Ok(Json(RefreshTokenResponse { token }))
    }

    async fn forgot_password(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ForgotPasswordRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        // The response never reveals whether the account exists
        let response = MessageResponse {
            message: "If your email is in our system, you will receive a password reset link"
                .to_owned(),
        };

        let user = resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        if let Some(user) = user {
            let token = auth::generate_secure_token();
            let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
            resources
                .database
                .set_reset_token(user.id, &token, expires_at)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            // No mailer is wired up; the token lands in the log for operators
            info!("password reset token issued for {}: {}", user.id, token);
        } else {
            info!(
                "password reset requested for unknown email {}",
                request.email
            );
        }

        Ok(Json(response))
    }

    async fn reset_password(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ResetPasswordRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        if !Self::is_valid_password(&request.new_password) {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let user = resources
            .database
            .get_user_by_reset_token(&request.token)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::auth_invalid("Reset token is invalid or has expired"))?;

        let password_hash = auth::hash_password(&request.new_password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        resources
            .database
            .update_password(user.id, &password_hash)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!("password reset completed for {}", user.id);
        Ok(Json(MessageResponse {
            message: "Password has been reset".to_owned(),
        }))
    }

    async fn delete_account(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<DeleteAccountRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        let user_id = authenticate(&headers, &resources)?;

        let user = resources
            .database
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("user"))?;

        let valid = auth::verify_password(request.password, user.password_hash)
            .await
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
        if !valid {
            return Err(AppError::auth_invalid("Password is incorrect"));
        }

        resources
            .database
            .delete_user(user_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!("account deleted: {user_id}");
        Ok(Json(MessageResponse {
            message: "Your account has been deleted".to_owned(),
        }))
    }
}

/// Extract and validate the bearer token, returning the caller's user id
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &Arc<ServerResources>,
) -> Result<Uuid, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::auth_required)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::auth_malformed("Authorization header is not a Bearer token"))?;

    let claims = resources.auth_manager.validate_token(token)?;
    Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::auth_invalid("Token subject is not a valid user id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(AuthRoutes::is_valid_email("user@example.com"));
        assert!(!AuthRoutes::is_valid_email("a@b"));
        assert!(!AuthRoutes::is_valid_email("@example.com"));
        assert!(!AuthRoutes::is_valid_email("userexample.com"));
        assert!(!AuthRoutes::is_valid_email("user@"));
    }

    #[test]
    fn password_validation_enforces_minimum_length() {
        assert!(AuthRoutes::is_valid_password("longenough"));
        assert!(!AuthRoutes::is_valid_password("short"));
    }

    #[test]
    fn register_request_accepts_name_alias() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email": "a@b.com", "password": "password1", "name": "Alice"}"#,
        )
        .unwrap();
        assert_eq!(request.display_name.as_deref(), Some("Alice"));
    }
}
