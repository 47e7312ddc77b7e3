//! Provider webhook receivers. Public, unvalidated, always `ok`.

use bytes::Bytes;

/// Handler for POST /api/addandearn/callback/order
pub async fn order_callback(body: Bytes) -> &'static str {
    tracing::info!(body_bytes = body.len(), "Order callback received");
    "ok"
}

/// Handler for POST /api/addandearn/callback/deposit
pub async fn deposit_callback(body: Bytes) -> &'static str {
    tracing::info!(body_bytes = body.len(), "Deposit callback received");
    "ok"
}

/// Handler for POST /api/bank-scraper/callback
pub async fn scraper_callback(body: Bytes) -> &'static str {
    tracing::info!(body_bytes = body.len(), "Bank scraper callback received");
    "ok"
}
