use crate::client::ApiClient;
use crate::endpoints;
use crate::types::system::{HealthStatus, PlatformStats};
use crate::Result;

/// Health probe and dashboard counters. Neither requires authentication.
pub struct SystemApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.client.get(endpoints::HEALTH_CHECK, None).await
    }

    pub async fn stats(&self) -> Result<PlatformStats> {
        self.client.get(endpoints::STATS, None).await
    }
}
