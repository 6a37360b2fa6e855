//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; state is just the typed configuration and
//! the HTTP client for the external CRM backend.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::AppConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: BackendClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let backend = BackendClient::new(&config.backend_url);
        Self { config: Arc::new(config), backend }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` pointed at a localhost backend nobody runs.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AppConfig {
            backend_url: "http://127.0.0.1:9".to_owned(),
            port: 0,
            cookie_secure: false,
        })
    }
}
