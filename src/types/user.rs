//! Profile models.

use serde::{Deserialize, Serialize};

/// Partial profile update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<f64>,
    /// Days until available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Complete profile read: the backend returns raw records for the nested
/// sections, so they stay untyped JSON here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBundle {
    #[serde(default)]
    pub profile: Option<serde_json::Value>,
    #[serde(default)]
    pub education: Vec<serde_json::Value>,
    #[serde(default)]
    pub experience: Vec<serde_json::Value>,
    #[serde(default)]
    pub applications: Vec<serde_json::Value>,
}
