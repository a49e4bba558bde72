//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use mymemo_core::QuoteStore;

use crate::backend::Backend;
use crate::config::Config;

/// Timeout for outbound HTTP requests (AI providers and backend).
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// The read-only quote table.
    pub quotes: QuoteStore,

    /// Shared HTTP client for AI provider calls.
    pub http: reqwest::Client,

    /// Typed client for the hosted backend (auth, notes, usage log).
    pub backend: Arc<Backend>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()?;

        let config = Arc::new(config);
        let backend = Arc::new(Backend::new(&config, http.clone()));
        let quotes = QuoteStore;

        tracing::info!(
            quote_count = quotes.len(),
            outbound_timeout_secs = OUTBOUND_TIMEOUT.as_secs(),
            "application state initialized"
        );

        Ok(Self {
            config,
            quotes,
            http,
            backend,
        })
    }
}
