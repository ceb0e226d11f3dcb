// ABOUTME: Integration tests for authentication flows
// ABOUTME: Covers password hashing, token refresh, and JWT error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_test_auth_manager, create_test_database, create_test_user};
use pantry_server::auth::{hash_password, verify_password, AuthManager, JwtValidationError};
use pantry_server::{AppError, ErrorCode};
use uuid::Uuid;

#[tokio::test]
async fn test_password_hash_round_trip() -> Result<()> {
    let hash = hash_password("correct horse battery staple")?;
    assert_ne!(hash, "correct horse battery staple");
    assert!(hash.starts_with("$2"), "expected a bcrypt hash, got {hash}");

    assert!(verify_password("correct horse battery staple".to_owned(), hash.clone()).await?);
    assert!(!verify_password("wrong password".to_owned(), hash).await?);
    Ok(())
}

#[tokio::test]
async fn test_token_subject_matches_stored_user() -> Result<()> {
    let database = create_test_database().await?;
    let auth_manager = create_test_auth_manager();
    let (user_id, user) = create_test_user(&database).await?;

    let token = auth_manager.generate_token(&user)?;
    let claims = auth_manager.validate_token(&token)?;

    assert_eq!(Uuid::parse_str(&claims.sub)?, user_id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
    Ok(())
}

#[tokio::test]
async fn test_refresh_preserves_identity() -> Result<()> {
    let database = create_test_database().await?;
    let auth_manager = create_test_auth_manager();
    let (_, user) = create_test_user(&database).await?;

    let original = auth_manager.generate_token(&user)?;
    let refreshed = auth_manager.refresh_token(&original)?;

    let claims = auth_manager.validate_token(&refreshed)?;
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.email, user.email);
    Ok(())
}

#[test]
fn test_jwt_errors_map_to_app_error_codes() {
    let expired = AuthManager::new(b"test-secret", -1);
    let user = pantry_core::models::User::new("chef@example.com".to_owned(), "hash".to_owned(), None);
    let token = expired.generate_token(&user).unwrap();

    let error = AppError::from(expired.validate_token(&token).unwrap_err());
    assert_eq!(error.code, ErrorCode::AuthExpired);
    assert_eq!(error.http_status(), 403);

    let manager = create_test_auth_manager();
    let wrong_secret = AuthManager::new(b"other-secret", 24).generate_token(&user).unwrap();
    let error = AppError::from(manager.validate_token(&wrong_secret).unwrap_err());
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.http_status(), 401);

    let error = AppError::from(manager.validate_token("garbage").unwrap_err());
    assert_eq!(error.code, ErrorCode::AuthMalformed);
    assert_eq!(error.http_status(), 403);
}

#[test]
fn test_malformed_variants_carry_details() {
    let manager = create_test_auth_manager();
    match manager.validate_token("only.two") {
        Err(JwtValidationError::TokenMalformed { details }) => {
            assert!(!details.is_empty());
        }
        other => panic!("expected TokenMalformed, got {other:?}"),
    }
}
