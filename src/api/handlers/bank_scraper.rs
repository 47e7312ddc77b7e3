//! Bank scraper session mocks

use crate::api::extract::JsonOrForm;
use crate::api::handlers::AppState;
use crate::api::models::{
    ScrapeSummary, ScrapingSession, SessionCreateRequest, SessionCreateResponse,
    SessionOrderRequest, SessionQueryResponse, SessionSnapshot, SessionStartResponse,
};
use crate::auth::credential::Principal;
use axum::{extract::State, Json};

pub const MOCK_BANK_NAME: &str = "State Bank of India";
pub const MOCK_BANK_LOGIN_URL: &str = "https://onlinesbi.sbi/";
/// session/query always reports this session, whatever was created
pub const MOCK_QUERY_SESSION_ID: &str = "session_1234567890_abc123";

const SCRAPE_COMPLETED: &str = "Scraping completed successfully";
const TRANSACTIONS_COUNT: u32 = 25;

/// Time-based id: `session_<unix millis>`
fn new_session_id() -> String {
    format!("session_{}", chrono::Utc::now().timestamp_millis())
}

/// Handler for POST /api/bank-scraper/session/create
pub async fn create_session(
    State(state): State<AppState>,
    principal: Principal,
    JsonOrForm(req): JsonOrForm<SessionCreateRequest>,
) -> Json<Option<SessionCreateResponse>> {
    let session_id = new_session_id();

    tracing::info!(
        principal_id = principal.id,
        session_id = %session_id,
        "Mock scraping session created"
    );

    state.mock.respond(SessionCreateResponse {
        success: true,
        message: "Scraping session created successfully".to_string(),
        data: ScrapingSession {
            order_sn: req.order_sn,
            session_id,
            bank_account_id: req.bank_account_id,
            bank_name: MOCK_BANK_NAME.to_string(),
            login_url: MOCK_BANK_LOGIN_URL.to_string(),
        },
    })
}

/// Handler for POST /api/bank-scraper/session/start
pub async fn start_session(
    State(state): State<AppState>,
    principal: Principal,
    JsonOrForm(req): JsonOrForm<SessionOrderRequest>,
) -> Json<Option<SessionStartResponse>> {
    tracing::info!(principal_id = principal.id, "Mock scraping session started");

    state.mock.respond(SessionStartResponse {
        success: true,
        order_sn: req.order_sn,
        message: SCRAPE_COMPLETED.to_string(),
        data: ScrapeSummary {
            transactions_count: TRANSACTIONS_COUNT,
            saved: 23,
            skipped: 2,
        },
    })
}

/// Handler for POST /api/bank-scraper/session/query
pub async fn query_session(
    State(state): State<AppState>,
    principal: Principal,
    JsonOrForm(req): JsonOrForm<SessionOrderRequest>,
) -> Json<Option<SessionQueryResponse>> {
    tracing::info!(principal_id = principal.id, "Mock scraping session queried");

    state.mock.respond(SessionQueryResponse {
        success: true,
        order_sn: req.order_sn,
        status: "completed".to_string(),
        message: SCRAPE_COMPLETED.to_string(),
        data: SessionSnapshot {
            session_id: MOCK_QUERY_SESSION_ID.to_string(),
            bank_name: MOCK_BANK_NAME.to_string(),
            transactions_count: TRANSACTIONS_COUNT,
        },
    })
}
