//! Session token generation and validation

use crate::core::error::{GatewayError, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: u64,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// Sign a session token for `username` that expires after `ttl`
pub fn generate_token(
    id: u64,
    username: &str,
    secret: &str,
    ttl: chrono::Duration,
) -> Result<String> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(ttl)
        .ok_or_else(|| GatewayError::TokenError("Failed to calculate expiration".to_string()))?;

    let claims = SessionClaims {
        id,
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| GatewayError::TokenError(e.to_string()))
}

/// Verify signature and expiry of a session token and return its claims.
/// Expiry is checked without leeway.
///
/// Errors come back as `jsonwebtoken` errors so the caller decides what the
/// client gets to see.
pub fn validate_token(
    token: &str,
    secret: &str,
) -> std::result::Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<SessionClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
    .map(|data| data.claims)
}
