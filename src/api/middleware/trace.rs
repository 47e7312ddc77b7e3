use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// HTTP header name for trace ID
pub const TRACE_ID_HEADER: &str = "X-Trace-Id";

/// Runs every request inside an `http_request` span tagged with a fresh
/// UUID v4 trace id, and returns that id in the `X-Trace-Id` header.
pub async fn trace_id_middleware(mut request: Request, next: Next) -> Response {
    let trace_id = Uuid::new_v4().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(TraceId(trace_id.clone()));

    let mut response = async move {
        let response = next.run(request).await;
        tracing::info!(status = %response.status(), "Request completed");
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}

/// Trace id of the current request, available from request extensions
#[derive(Clone, Debug)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
