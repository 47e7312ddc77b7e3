use axum::Json;
use serde_json::{json, Value};

pub const BANNER: &str = "Mock Gateway API Running ✅";

/// Handler for GET /
pub async fn index() -> &'static str {
    BANNER
}

/// Handler for GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
