pub mod addandearn;
pub mod bank_scraper;
pub mod callbacks;
pub mod system;

pub use addandearn::*;
pub use bank_scraper::*;
pub use callbacks::*;
pub use system::*;

use crate::api::mock::MockGate;
use crate::auth::credential::CredentialValidator;
use crate::core::config::Config;
use std::sync::Arc;

/// Shared application state for handlers.
///
/// Built once at startup; nothing in it changes while serving.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub validator: Arc<CredentialValidator>,
    pub mock: MockGate,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let validator = Arc::new(CredentialValidator::new(&config.security));
        let mock = MockGate::new(config.gateway.mock_responses);

        Self {
            config: Arc::new(config),
            validator,
            mock,
        }
    }
}
