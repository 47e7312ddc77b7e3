//! Mock Gateway - payment and bank-scraper provider simulator

use mock_gateway::{api, core, VERSION};

use anyhow::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (CLI args, env vars, config file)
    let config = match core::config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let _logger = match core::Logger::init(&config.logging) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return Err(e);
        }
    };

    info!("Starting Mock Gateway v{}", VERSION);
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Server configuration"
    );
    info!(
        auth_mode = ?config.security.auth_mode,
        developer_token_configured = config.security.developer_token().is_some(),
        session_ttl_hours = config.security.session_ttl_hours,
        mock_responses = config.gateway.mock_responses,
        "Gateway configuration"
    );

    if config.security.uses_default_secret() {
        warn!("JWT_SECRET is not set, session tokens are signed with the built-in default secret");
    }
    if !config.gateway.mock_responses {
        warn!("Mock responses are disabled (MOCK_GATEWAY != 1), mock endpoints will reply with null");
    }

    let server = api::ApiServer::new(config);

    server.serve().await?;

    Ok(())
}
