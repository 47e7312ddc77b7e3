//! Response gate for mock payloads

use axum::Json;
use serde::Serialize;

/// Wraps every mock endpoint payload.
///
/// When disabled the payload is dropped and the body becomes JSON `null`;
/// the status code is left alone.
#[derive(Debug, Clone, Copy)]
pub struct MockGate {
    enabled: bool,
}

impl MockGate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn respond<T: Serialize>(&self, payload: T) -> Json<Option<T>> {
        if self.enabled {
            Json(Some(payload))
        } else {
            tracing::debug!("Mock responses disabled, replying with null body");
            Json(None)
        }
    }
}
