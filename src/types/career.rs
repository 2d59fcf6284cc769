//! Career recommendation and progression models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendationsRequest {
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub lang: String,
}

impl CareerRecommendationsRequest {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            experience: None,
            lang: "en".to_string(),
        }
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub career_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub growth: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    /// 0–100 demand index.
    #[serde(default)]
    pub demand: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<CareerRecommendation>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_name: Option<String>,
    /// False when the backend fell back to an empty list; the `error` field
    /// then explains why.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Input for the career progression view. The response shape is chart-driven
/// and ad hoc, so it stays a raw `serde_json::Value` at the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathRequest {
    pub current_skill: String,
    pub years_experience: u32,
}

impl CareerPathRequest {
    pub fn new(current_skill: impl Into<String>, years_experience: u32) -> Self {
        Self {
            current_skill: current_skill.into(),
            years_experience,
        }
    }
}
