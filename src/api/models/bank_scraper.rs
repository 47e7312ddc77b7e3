use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::echo_field;

#[derive(Debug, Default, Deserialize)]
pub struct SessionCreateRequest {
    #[serde(default, deserialize_with = "echo_field")]
    pub order_sn: Option<Value>,
    #[serde(default, deserialize_with = "echo_field")]
    pub bank_account_id: Option<Value>,
}

/// Body of session/start and session/query
#[derive(Debug, Default, Deserialize)]
pub struct SessionOrderRequest {
    #[serde(default, deserialize_with = "echo_field")]
    pub order_sn: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SessionCreateResponse {
    pub success: bool,
    pub message: String,
    pub data: ScrapingSession,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapingSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_sn: Option<Value>,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<Value>,
    pub bank_name: String,
    pub login_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_sn: Option<Value>,
    pub message: String,
    pub data: ScrapeSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeSummary {
    pub transactions_count: u32,
    pub saved: u32,
    pub skipped: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQueryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_sn: Option<Value>,
    pub status: String,
    pub message: String,
    pub data: SessionSnapshot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub bank_name: String,
    pub transactions_count: u32,
}
