//! Client configuration: base URL, timeout and default headers.
//!
//! Defaults target the local development backend and can be overridden per
//! environment via the builder or the `GREEN_API_*` environment variables,
//! so no base URL is ever hard-coded at call sites.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Production backend.
pub const PRODUCTION_BASE_URL: &str = "https://api.greenmatchers.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "GREEN_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "GREEN_API_TIMEOUT_SECS";

/// Configuration snapshot used to construct an [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL prefix prepended to every relative request path.
    pub base_url: String,
    /// Bound on every request; expiry surfaces as a no-response error.
    pub timeout: Duration,
    /// Headers attached to every outgoing request.
    pub default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Defaults plus `GREEN_API_BASE_URL` / `GREEN_API_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url,
            timeout,
            default_headers: default_headers(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: default_headers(),
        }
    }
}

fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ])
}
