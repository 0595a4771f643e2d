use std::time::Duration;

use crate::config::Config;

/// Shared application state: the immutable configuration plus one pooled
/// HTTP client. Nothing here is mutable after startup; each request is an
/// independent unit of work.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Bounded timeouts so a hung collaborator degrades the request
        // instead of blocking it
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
