//! HTTP Server implementation
//!
//! Axum server with configurable host/port binding, graceful shutdown,
//! request tracing and CORS.

use crate::api::handlers::AppState;
use crate::api::middleware::trace_id_middleware;
use crate::api::routes::build_api_routes;
use crate::core::config::ServerConfig;
use crate::core::Config;
use axum::{http::HeaderValue, middleware, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// HTTP API Server
pub struct ApiServer {
    router: Router,
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new API server from the startup configuration
    pub fn new(config: Config) -> Self {
        let server_config = config.server.clone();
        let router = Self::build_router(config);

        Self {
            router,
            config: server_config,
        }
    }

    /// Build the Axum router with all routes and middleware
    fn build_router(config: Config) -> Router {
        let cors = Self::build_cors_layer(&config.security.allowed_origins);
        let state = AppState::new(config);

        build_api_routes(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(trace_id_middleware))
                .layer(cors),
        )
    }

    /// Build CORS layer from allowed origins configuration
    fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if allowed_origins.iter().any(|origin| origin == "*") {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            cors.allow_origin(origins)
        }
    }

    /// Start the HTTP server and block until it shuts down gracefully
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let socket_addr: SocketAddr = addr.parse()?;

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;

        info!(addr = %socket_addr, "Mock Gateway Server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server shut down gracefully");

        Ok(())
    }

    /// Get a reference to the router
    pub fn router(&self) -> &Router {
        &self.router
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Initiating graceful shutdown...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::middleware::TRACE_ID_HEADER;
    use crate::core::config::CliArgs;
    use axum::{body::Body, extract::Request, http::StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_responses_carry_trace_id() {
        let server = ApiServer::new(Config::load_from(CliArgs::default()).unwrap());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = server.router().clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_by_default() {
        let server = ApiServer::new(Config::load_from(CliArgs::default()).unwrap());

        let request = Request::builder()
            .uri("/")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = server.router().clone().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
