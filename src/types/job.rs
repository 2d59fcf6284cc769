//! Job search and application models.

use serde::{Deserialize, Serialize};

/// Search query. `skill_text` drives matching; `lang` selects the response
/// language; `location` is auto-detected by the backend when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub skill_text: Vec<String>,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobSearchRequest {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skill_text: skills.into_iter().map(Into::into).collect(),
            lang: "en".to_string(),
            location: None,
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// One matched job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: i64,
    pub job_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub salary_boost: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub company_rating: Option<String>,
    #[serde(default)]
    pub sdg_impact: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    /// 0.0–1.0 match score; listings arrive sorted by it, descending.
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub matches: Vec<JobMatch>,
    #[serde(default)]
    pub user_location: Option<String>,
    #[serde(default)]
    pub auto_detected: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub total_jobs: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplyRequest {
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

impl JobApplyRequest {
    pub fn new(job_id: i64) -> Self {
        Self {
            job_id,
            cover_letter: None,
        }
    }

    pub fn cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplyResponse {
    pub message: String,
    #[serde(default)]
    pub application_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A previously submitted application, as returned by the applications list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub application_id: Option<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_serializes_without_location() {
        let req = JobSearchRequest::new(["python", "data"]).lang("hi");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["skill_text"], serde_json::json!(["python", "data"]));
        assert_eq!(json["lang"], "hi");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn search_response_parses_backend_shape() {
        let resp: JobSearchResponse = serde_json::from_str(
            r#"{
                "matches": [{
                    "id": 3,
                    "job_title": "Solar Install Lead",
                    "description": "Rooftop solar",
                    "salary_range": "₹12 LPA",
                    "location": "Pune",
                    "distance_km": 4.2,
                    "company": "SunGrid",
                    "similarity": 0.95,
                    "apply_url": "https://greenmatchers.com/jobs/3"
                }],
                "user_location": "Pune",
                "auto_detected": true,
                "suggestions": ["Battery Storage"],
                "total_jobs": 1,
                "language": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.matches.len(), 1);
        assert_eq!(resp.matches[0].job_title, "Solar Install Lead");
        assert_eq!(resp.matches[0].similarity, Some(0.95));
        assert!(resp.auto_detected);
    }

    #[test]
    fn sparse_match_still_parses() {
        let m: JobMatch = serde_json::from_str(r#"{"id": 1, "job_title": "Eco Engineer"}"#).unwrap();
        assert!(m.company.is_none());
        assert!(m.similarity.is_none());
    }
}
