//! Request body extraction

use crate::core::error::GatewayError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Body extractor accepting either a JSON or a URL-encoded form body.
///
/// A missing body, or one with any other content type, yields
/// `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

        parse_body(kind, &bytes).map(JsonOrForm)
    }
}

fn parse_body<T>(kind: BodyKind, bytes: &[u8]) -> Result<T, GatewayError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match kind {
        BodyKind::Json => serde_json::from_slice(bytes)
            .map_err(|e| GatewayError::InvalidRequest(format!("Invalid JSON body: {}", e))),
        BodyKind::Form => {
            let fields: Map<String, Value> = url::form_urlencoded::parse(bytes)
                .into_owned()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            serde_json::from_value(Value::Object(fields))
                .map_err(|e| GatewayError::InvalidRequest(format!("Invalid form body: {}", e)))
        }
        BodyKind::Other => Ok(T::default()),
    }
}
