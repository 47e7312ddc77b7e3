//! Credential parsing and validation
//!
//! The `Authorization` header carries one of two credential kinds. Which
//! kinds are accepted, and the messages used to reject the rest, depend on
//! the configured [`AuthMode`].

use crate::auth::jwt::{validate_token, SessionClaims};
use crate::core::config::{AuthMode, SecurityConfig};
use crate::core::error::{GatewayError, Result};
use serde::Serialize;

/// Identity id given to every caller authenticated by the developer token
pub const DEVELOPER_PRINCIPAL_ID: u64 = 999;

const API_TOKEN_PREFIX: &str = "Token ";
const SESSION_TOKEN_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Admin => "admin",
        }
    }
}

/// Authenticated identity attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: Role,
}

impl Principal {
    pub fn developer() -> Self {
        Self {
            id: DEVELOPER_PRINCIPAL_ID,
            username: None,
            role: Role::Developer,
        }
    }

    pub fn from_session(claims: SessionClaims) -> Self {
        Self {
            id: claims.id,
            username: Some(claims.username),
            role: Role::Admin,
        }
    }
}

/// A credential as presented in the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    ApiToken(&'a str),
    SessionToken(&'a str),
}

impl<'a> Credential<'a> {
    /// Select the credential kind by header prefix
    pub fn from_header(header: &'a str) -> Option<Self> {
        if let Some(token) = header.strip_prefix(API_TOKEN_PREFIX) {
            Some(Credential::ApiToken(token.trim()))
        } else if let Some(token) = header.strip_prefix(SESSION_TOKEN_PREFIX) {
            Some(Credential::SessionToken(token.trim()))
        } else {
            None
        }
    }
}

/// Header value as seen by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationHeader<'a> {
    Absent,
    Present(&'a str),
    /// Present but not valid visible ASCII / UTF-8
    Unreadable,
}

/// Validates credentials against the configured secrets
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    mode: AuthMode,
    developer_token: Option<String>,
    jwt_secret: String,
}

impl CredentialValidator {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            mode: config.auth_mode,
            developer_token: config.developer_token().map(str::to_string),
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    /// Derive a principal from the header, or the error to send back
    pub fn authenticate(&self, header: AuthorizationHeader<'_>) -> Result<Principal> {
        match self.mode {
            AuthMode::Dual => self.authenticate_dual(header),
            AuthMode::Bearer => self.authenticate_bearer(header),
        }
    }

    fn authenticate_dual(&self, header: AuthorizationHeader<'_>) -> Result<Principal> {
        let value = match header {
            AuthorizationHeader::Absent | AuthorizationHeader::Present("") => {
                return Err(GatewayError::MissingCredential(
                    "Missing Authorization header".to_string(),
                ))
            }
            AuthorizationHeader::Unreadable => return Err(malformed()),
            AuthorizationHeader::Present(value) => value,
        };

        match Credential::from_header(value).ok_or_else(malformed)? {
            Credential::ApiToken(token) => self
                .check_api_token(token)
                .ok_or_else(|| GatewayError::InvalidCredential("Invalid API Token".to_string())),
            Credential::SessionToken(token) => self.check_session_token(token).ok_or_else(|| {
                GatewayError::InvalidCredential("Invalid JWT token".to_string())
            }),
        }
    }

    /// Single-scheme mode: the token is the second word of the header,
    /// whatever the scheme word says.
    fn authenticate_bearer(&self, header: AuthorizationHeader<'_>) -> Result<Principal> {
        let token = match header {
            AuthorizationHeader::Present(value) => value.split_whitespace().nth(1),
            AuthorizationHeader::Absent => None,
            AuthorizationHeader::Unreadable => {
                return Err(GatewayError::InvalidCredential("Invalid token".to_string()))
            }
        };

        let token =
            token.ok_or_else(|| GatewayError::MissingCredential("Missing token".to_string()))?;

        self.check_session_token(token)
            .ok_or_else(|| GatewayError::InvalidCredential("Invalid token".to_string()))
    }

    fn check_api_token(&self, token: &str) -> Option<Principal> {
        match &self.developer_token {
            Some(expected) if expected.as_str() == token => Some(Principal::developer()),
            _ => None,
        }
    }

    fn check_session_token(&self, token: &str) -> Option<Principal> {
        match validate_token(token, &self.jwt_secret) {
            Ok(claims) => Some(Principal::from_session(claims)),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}

fn malformed() -> GatewayError {
    GatewayError::MalformedCredential(
        "Invalid Authorization format. Use Bearer <token> or Token <api_token>".to_string(),
    )
}
