//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the procurement backend and the
//! backend's base URL.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the backend client from host config.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self::with_client(http, &config.backend_url))
    }

    pub fn with_client(http: reqwest::Client, backend_url: &str) -> Self {
        Self { http, backend_url: Arc::from(backend_url.trim_end_matches('/')) }
    }
}
