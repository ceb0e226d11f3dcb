// ABOUTME: JWT issuance and validation for user authentication
// ABOUTME: HS256 tokens with detailed expiry/invalid/malformed error reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Authentication and `JWT` token management

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pantry_core::models::User;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Convert a duration to a human-readable format
fn humanize_duration(duration: Duration) -> String {
    let total_secs = duration.num_seconds().abs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        format!("{hours} hours")
    } else if minutes > 0 {
        format!("{minutes} minutes")
    } else {
        format!("{total_secs} seconds")
    }
}

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired {
                expired_at,
                current_time,
            } => {
                let expired_for = current_time.signed_duration_since(*expired_at);
                write!(
                    f,
                    "JWT token expired {} ago at {}",
                    humanize_duration(expired_for),
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

/// Issues and validates HS256 `JWT`s for user sessions
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager from the shared signing secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Generate a `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails due to invalid claims
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a `JWT` token and return its claims
    ///
    /// Expiry is checked manually after signature verification so the
    /// caller gets a precise [`JwtValidationError::TokenExpired`] with
    /// timestamps instead of a generic decode failure.
    ///
    /// # Errors
    ///
    /// Returns [`JwtValidationError`] when the signature is invalid, the
    /// token cannot be parsed, or it has expired.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(map_decode_error)?;
        let claims = token_data.claims;

        let now = Utc::now();
        if claims.exp < now.timestamp() {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(now);
            tracing::warn!(
                "JWT validation failed: token expired {} ago",
                humanize_duration(now.signed_duration_since(expired_at))
            );
            return Err(JwtValidationError::TokenExpired {
                expired_at,
                current_time: now,
            });
        }

        Ok(claims)
    }

    /// Re-issue a fresh token for the holder of a still-valid token
    ///
    /// # Errors
    ///
    /// Returns [`JwtValidationError`] when the presented token fails
    /// validation; an expired token cannot be refreshed.
    pub fn refresh_token(&self, token: &str) -> Result<String, JwtValidationError> {
        let old_claims = self.validate_token(token)?;

        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);
        let claims = Claims {
            sub: old_claims.sub,
            email: old_claims.email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            JwtValidationError::TokenInvalid {
                reason: format!("failed to encode refreshed token: {e}"),
            }
        })
    }
}

fn map_decode_error(error: jsonwebtoken::errors::Error) -> JwtValidationError {
    use jsonwebtoken::errors::ErrorKind;
    tracing::warn!("JWT token validation failed: {:?}", error);

    match error.kind() {
        ErrorKind::ExpiredSignature => {
            let now = Utc::now();
            JwtValidationError::TokenExpired {
                expired_at: now,
                current_time: now,
            }
        }
        ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
            reason: "signature verification failed".into(),
        },
        ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
            details: "not a valid JWT structure".into(),
        },
        ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
            details: format!("invalid base64 encoding: {base64_err}"),
        },
        ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
            details: format!("invalid claims payload: {json_err}"),
        },
        ErrorKind::Utf8(utf8_err) => JwtValidationError::TokenMalformed {
            details: format!("invalid UTF-8 in token: {utf8_err}"),
        },
        _ => JwtValidationError::TokenInvalid {
            reason: error.to_string(),
        },
    }
}

impl From<JwtValidationError> for pantry_core::AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            JwtValidationError::TokenInvalid { reason } => Self::auth_invalid(reason),
            JwtValidationError::TokenMalformed { details } => Self::auth_malformed(details),
        }
    }
}

/// Hash a password with bcrypt at the default cost
///
/// # Errors
///
/// Returns an error if bcrypt hashing fails
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Verify a password against its bcrypt hash on a blocking thread
///
/// bcrypt verification is CPU-bound by design, so it runs under
/// `spawn_blocking` to keep the async runtime responsive.
///
/// # Errors
///
/// Returns an error if the blocking task is cancelled or the hash is
/// not valid bcrypt
pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash)).await??;
    Ok(valid)
}

/// Generate a random URL-safe token for password resets and recipe shares
#[must_use]
pub fn generate_secure_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("chef@example.com".to_owned(), "hash".to_owned(), None)
    }

    #[test]
    fn round_trip_token_carries_identity() {
        let manager = AuthManager::new(b"test-secret", 24);
        let user = test_user();
        let token = manager.generate_token(&user).unwrap();
        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issuer = AuthManager::new(b"secret-a", 24);
        let verifier = AuthManager::new(b"secret-b", 24);
        let token = issuer.generate_token(&test_user()).unwrap();
        assert!(matches!(
            verifier.validate_token(&token),
            Err(JwtValidationError::TokenInvalid { .. })
        ));
    }

    #[test]
    fn expired_token_reports_timestamps() {
        let manager = AuthManager::new(b"test-secret", -1);
        let token = manager.generate_token(&test_user()).unwrap();
        match manager.validate_token(&token) {
            Err(JwtValidationError::TokenExpired {
                expired_at,
                current_time,
            }) => assert!(expired_at < current_time),
            other => panic!("expected TokenExpired, got {other:?}"),
        }
    }

    #[test]
    fn refresh_rejects_expired_token() {
        let manager = AuthManager::new(b"test-secret", -1);
        let token = manager.generate_token(&test_user()).unwrap();
        assert!(manager.refresh_token(&token).is_err());
    }

    #[test]
    fn garbage_is_malformed() {
        let manager = AuthManager::new(b"test-secret", 24);
        assert!(matches!(
            manager.validate_token("not-a-jwt"),
            Err(JwtValidationError::TokenMalformed { .. })
        ));
    }

    #[test]
    fn secure_tokens_are_unique_hex() {
        let first = generate_secure_token();
        let second = generate_secure_token();
        assert_eq!(first.len(), 64);
        assert_ne!(first, second);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
