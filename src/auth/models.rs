//! Authentication request/response models

use crate::auth::credential::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request. Fields keep whatever JSON type the client sent.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

/// Whether a submitted field counts as filled in: `null`, `false`, `0`
/// and `""` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_api_token: Option<String>,
    pub user: UserInfo,
}

/// Mock user returned by login
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: u64,
    pub username: Value,
    pub role: Role,
}
