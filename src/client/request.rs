use std::collections::HashMap;
use std::time::Duration;

/// Per-call request configuration, merged over the client defaults at
/// dispatch time.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Extra headers for this call only.
    pub headers: HashMap<String, String>,
    /// Query parameters appended to the request URL.
    pub query: HashMap<String, String>,
    /// Override of the client-level timeout for this call only.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
