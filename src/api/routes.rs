//! API routes

use crate::api::handlers::{
    create_deposit, create_order, create_session, deposit_balance, deposit_callback,
    health_check, index, order_callback, query_order, query_session, scraper_callback,
    start_session, AppState,
};
use crate::auth::handlers::login;
use crate::auth::middleware::authenticate;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Build the API routes
pub fn build_api_routes(state: AppState) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/auth/login", post(login))
        // Provider callbacks
        .route("/api/addandearn/callback/order", post(order_callback))
        .route("/api/addandearn/callback/deposit", post(deposit_callback))
        .route("/api/bank-scraper/callback", post(scraper_callback));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        // Add and earn
        .route("/api/addandearn/order/create", post(create_order))
        .route("/api/addandearn/order/query", post(query_order))
        .route("/api/addandearn/deposit/create", post(create_deposit))
        .route("/api/addandearn/deposit/balance", post(deposit_balance))
        // Bank scraper
        .route("/api/bank-scraper/session/create", post(create_session))
        .route("/api/bank-scraper/session/start", post(start_session))
        .route("/api/bank-scraper/session/query", post(query_session))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    public_routes
        .merge(protected_routes)
        .with_state(state)
}
