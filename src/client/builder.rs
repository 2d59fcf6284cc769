use crate::client::core::ApiClient;
use crate::config::{ClientConfig, PRODUCTION_BASE_URL};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`ClientConfig::from_env`], so `GREEN_API_BASE_URL` and
/// `GREEN_API_TIMEOUT_SECS` apply unless overridden here. The `base_url`
/// override doubles as the injection point for mock servers in tests.
pub struct ApiClientBuilder {
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::from_env(),
            token: None,
        }
    }

    /// Override the base URL (must be a valid URL prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Target the production backend.
    pub fn production(mut self) -> Self {
        self.config.base_url = PRODUCTION_BASE_URL.to_string();
        self
    }

    /// Override the request timeout (must be positive).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add or replace a default header sent with every request.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .insert(name.into(), value.into());
        self
    }

    /// Start authenticated - for restoring a session token the embedding
    /// application persisted across restarts.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client. Configuration problems surface here as
    /// request-construction errors, before any request is made.
    pub fn build(self) -> Result<ApiClient> {
        let transport = Arc::new(HttpTransport::new(&self.config)?);
        if let Some(token) = self.token {
            transport.set_token(token);
        }
        Ok(ApiClient::from_transport(transport))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
