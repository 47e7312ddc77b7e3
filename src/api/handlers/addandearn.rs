//! Add-and-earn order and deposit mocks

use crate::api::extract::JsonOrForm;
use crate::api::handlers::AppState;
use crate::api::models::{
    interpolate, DepositBalance, OrderAmount, OrderCreateRequest, PaymentLink, StatusEnvelope,
};
use crate::auth::credential::Principal;
use axum::{extract::State, Json};

/// Balance reported by deposit/balance
pub const MOCK_BALANCE: i64 = 98_765_432;
/// Amount reported by order/query
pub const MOCK_ORDER_MONEY: i64 = 10;

/// Handler for POST /api/addandearn/order/create
pub async fn create_order(
    State(state): State<AppState>,
    principal: Principal,
    JsonOrForm(req): JsonOrForm<OrderCreateRequest>,
) -> Json<Option<StatusEnvelope<PaymentLink>>> {
    let pay_url = format!(
        "{}/{}",
        state.config.gateway.pay_url_base.trim_end_matches('/'),
        interpolate(req.order_sn.as_ref())
    );

    tracing::info!(principal_id = principal.id, pay_url = %pay_url, "Mock order created");

    state.mock.respond(StatusEnvelope::ok(
        "ok",
        Some(PaymentLink {
            link_type: "url".to_string(),
            pay_url,
        }),
    ))
}

/// Handler for POST /api/addandearn/order/query
pub async fn query_order(
    State(state): State<AppState>,
    principal: Principal,
) -> Json<Option<StatusEnvelope<OrderAmount>>> {
    tracing::info!(principal_id = principal.id, "Mock order queried");

    state.mock.respond(StatusEnvelope::ok(
        "success",
        Some(OrderAmount {
            money: MOCK_ORDER_MONEY,
        }),
    ))
}

/// Handler for POST /api/addandearn/deposit/create
pub async fn create_deposit(
    State(state): State<AppState>,
    principal: Principal,
) -> Json<Option<StatusEnvelope<()>>> {
    tracing::info!(principal_id = principal.id, "Mock deposit created");

    state.mock.respond(StatusEnvelope::ok("ok", None))
}

/// Handler for POST /api/addandearn/deposit/balance
pub async fn deposit_balance(
    State(state): State<AppState>,
    principal: Principal,
) -> Json<Option<StatusEnvelope<DepositBalance>>> {
    tracing::info!(principal_id = principal.id, "Mock balance queried");

    state.mock.respond(StatusEnvelope::ok(
        "ok",
        Some(DepositBalance {
            balance: MOCK_BALANCE,
        }),
    ))
}
