//! Authentication API handlers

use crate::api::extract::JsonOrForm;
use crate::api::handlers::AppState;
use crate::auth::credential::Role;
use crate::auth::jwt::generate_token;
use crate::auth::models::{is_truthy, LoginRequest, LoginResponse, UserInfo};
use crate::core::error::{GatewayError, Result};
use axum::{extract::State, Json};
use serde_json::Value;

/// Every login resolves to this mock user id
pub const MOCK_USER_ID: u64 = 1;

/// Handler for POST /api/auth/login - mock login.
///
/// Any username/password pair where both are filled in is accepted.
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let username = req.username.filter(is_truthy);
    let password = req.password.filter(is_truthy);

    let username = match (username, password) {
        (Some(username), Some(_)) => username,
        _ => return Err(GatewayError::InvalidLoginInput),
    };

    let security = &state.config.security;
    let ttl = security.session_ttl().ok_or_else(|| {
        GatewayError::TokenError(format!(
            "session_ttl_hours out of range: {}",
            security.session_ttl_hours
        ))
    })?;
    let display_name = match &username {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };
    let token = generate_token(MOCK_USER_ID, &display_name, &security.jwt_secret, ttl)?;

    tracing::info!(username = %display_name, "Login successful");

    Ok(Json(LoginResponse {
        token,
        developer_api_token: security.developer_token().map(str::to_string),
        user: UserInfo {
            id: MOCK_USER_ID,
            username,
            role: Role::Admin,
        },
    }))
}
