//! Authentication middleware

use crate::api::handlers::AppState;
use crate::auth::credential::{AuthorizationHeader, Principal};
use crate::core::error::GatewayError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Authentication middleware for protected routes.
///
/// Rejects the request before the handler runs unless the `Authorization`
/// header yields a [`Principal`], which is then stored in the request
/// extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = match request.headers().get(header::AUTHORIZATION) {
        None => AuthorizationHeader::Absent,
        Some(value) => value
            .to_str()
            .map(AuthorizationHeader::Present)
            .unwrap_or(AuthorizationHeader::Unreadable),
    };

    let principal = match state.validator.authenticate(header) {
        Ok(principal) => principal,
        Err(e) => return e.into_response(),
    };

    tracing::debug!(
        principal_id = principal.id,
        role = principal.role.as_str(),
        "Request authenticated"
    );

    request.extensions_mut().insert(principal);

    next.run(request).await
}

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            GatewayError::MissingCredential("Missing Authorization header".to_string())
        })
    }
}
