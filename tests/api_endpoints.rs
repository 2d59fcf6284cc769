//! Integration tests for the typed endpoint wrappers against recorded
//! backend response shapes.

use green_matchers_api::types::{
    CareerRecommendationsRequest, JobApplyRequest, JobSearchRequest, LoginRequest, ProfileUpdate,
    RegisterRequest, TranslateRequest,
};
use green_matchers_api::ApiClientBuilder;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn login_parses_token_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({"username": "demo", "password": "secret"})))
        .with_status(200)
        .with_body(
            r#"{
                "access_token": "jwt-token",
                "token_type": "bearer",
                "user": {"user_id": 7, "username": "demo", "email": "demo@example.com", "role": "job_seeker", "is_verified": true}
            }"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .unwrap();

    let session = client
        .auth()
        .login(&LoginRequest::new("demo", "secret"))
        .await
        .unwrap();
    assert_eq!(session.access_token, "jwt-token");
    assert_eq!(session.user.unwrap().username, "demo");
    mock.assert_async().await;
}

#[tokio::test]
async fn oauth_token_posts_form_encoded_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/token")
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("grant_type=password".into()),
            Matcher::Regex("username=demo".into()),
            Matcher::Regex("password=secret".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token": "jwt-token", "token_type": "bearer"}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .unwrap();

    let session = client.auth().token("demo", "secret").await.unwrap();
    assert_eq!(session.token_type, "bearer");
    mock.assert_async().await;
}

#[tokio::test]
async fn register_round_trips() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::PartialJson(json!({"role": "job_seeker"})))
        .with_status(200)
        .with_body(
            r#"{
                "message": "User registered successfully",
                "user_id": 11,
                "access_token": "jwt-token",
                "token_type": "bearer",
                "role": "job_seeker"
            }"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .unwrap();

    let created = client
        .auth()
        .register(&RegisterRequest::new(
            "asha",
            "asha@example.com",
            "pw",
            "Asha Rao",
        ))
        .await
        .unwrap();
    assert_eq!(created.user_id, 11);
    assert_eq!(created.message, "User registered successfully");
}

#[tokio::test]
async fn job_search_parses_matches() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/jobs/search")
        .match_body(Matcher::Json(
            json!({"skill_text": ["python", "data"], "lang": "en", "location": "Pune"}),
        ))
        .with_status(200)
        .with_body(
            r#"{
                "matches": [
                    {"id": 3, "job_title": "Solar Install Lead", "company": "SunGrid", "similarity": 0.95},
                    {"id": 9, "job_title": "Wind Analyst", "company": "VoltWind", "similarity": 0.85}
                ],
                "user_location": "Pune",
                "auto_detected": false,
                "suggestions": ["Battery Storage", "Grid Design"],
                "total_jobs": 2,
                "language": "en"
            }"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let request = JobSearchRequest::new(["python", "data"]).location("Pune");
    let results = client.jobs().search(&request).await.unwrap();
    assert_eq!(results.matches.len(), 2);
    assert_eq!(results.matches[0].similarity, Some(0.95));
    assert_eq!(results.suggestions.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn vector_search_hits_the_vector_route() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/vector/jobs/search")
        .with_status(200)
        .with_body(r#"{"matches": [], "total_jobs": 0}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let results = client
        .vector()
        .search_jobs(&JobSearchRequest::new(["hydrogen"]))
        .await
        .unwrap();
    assert!(results.matches.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn job_apply_round_trips() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/jobs/apply")
        .match_body(Matcher::Json(json!({"job_id": 3, "cover_letter": "Dear Hiring Manager"})))
        .with_status(200)
        .with_body(
            r#"{"message": "Application submitted successfully", "application_id": 21, "status": "applied"}"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let receipt = client
        .jobs()
        .apply(&JobApplyRequest::new(3).cover_letter("Dear Hiring Manager"))
        .await
        .unwrap();
    assert_eq!(receipt.application_id, Some(21));
    assert_eq!(receipt.status.as_deref(), Some("applied"));
}

#[tokio::test]
async fn career_recommendations_parse() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/career/recommendations")
        .with_status(200)
        .with_body(
            r#"{
                "recommendations": [{
                    "career_id": 1,
                    "title": "Renewable Energy Specialist",
                    "description": "Focus on solar, wind, and other renewable energy sources.",
                    "required_skills": ["Solar Energy", "Wind Power", "Project Management"],
                    "growth": "Very High",
                    "salary_range": "₹8-15 LPA",
                    "demand": 95,
                    "category": "Renewable Energy",
                    "experience_level": "Mid to Senior"
                }],
                "total_count": 1,
                "language": "en",
                "language_name": "English",
                "success": true
            }"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let recs = client
        .careers()
        .recommendations(&CareerRecommendationsRequest::new(["solar", "project management"]))
        .await
        .unwrap();
    assert!(recs.success);
    assert_eq!(recs.recommendations[0].career_id, 1);
    assert_eq!(recs.recommendations[0].demand, Some(95.0));
}

#[tokio::test]
async fn translate_and_languages() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/translate")
        .match_body(Matcher::Json(json!({"text": "Green jobs", "target_lang": "hi"})))
        .with_status(200)
        .with_body(
            r#"{
                "original_text": "Green jobs",
                "translated_text": "हरित नौकरियां",
                "target_language": "hi",
                "success": true
            }"#,
        )
        .create_async()
        .await;
    let _m = server
        .mock("GET", "/api/languages")
        .with_status(200)
        .with_body(
            r#"{"languages": [
                {"code": "en", "name": "English", "nativeName": "English"},
                {"code": "hi", "name": "Hindi", "nativeName": "हिन्दी"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let result = client
        .translate()
        .translate(&TranslateRequest::new("Green jobs", "hi"))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.translated_text, "हरित नौकरियां");

    let languages = client.translate().languages().await.unwrap();
    assert_eq!(languages.languages.len(), 2);
    assert_eq!(languages.languages[1].native_name, "हिन्दी");
}

#[tokio::test]
async fn profile_update_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/profile")
        .match_body(Matcher::Json(json!({"headline": "Solar engineer"})))
        .with_status(200)
        .with_body(r#"{"message": "Profile updated"}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let update = ProfileUpdate {
        headline: Some("Solar engineer".to_string()),
        ..ProfileUpdate::new()
    };
    client.users().update_profile(&update).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn profile_read_parses_loose_bundle() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/users/profile")
        .with_status(200)
        .with_body(
            r#"{
                "profile": {"headline": "Solar engineer"},
                "education": [{"institution": "IIT"}],
                "experience": [],
                "applications": [{"job_id": 3, "status": "applied"}]
            }"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let bundle = client.users().profile().await.unwrap();
    assert!(bundle.profile.is_some());
    assert_eq!(bundle.education.len(), 1);
    assert_eq!(bundle.applications[0]["status"], "applied");
}

#[tokio::test]
async fn resume_upload_is_multipart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/upload-resume")
        .match_header("content-type", Matcher::Regex("multipart/form-data".into()))
        .with_status(200)
        .with_body(r#"{"message": "Resume uploaded", "resume_url": "/uploads/resumes/r1.pdf"}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let receipt = client
        .users()
        .upload_resume("resume.pdf", b"%PDF-1.4 fake".to_vec())
        .await
        .unwrap();
    assert_eq!(receipt["message"], "Resume uploaded");
    mock.assert_async().await;
}

#[tokio::test]
async fn stats_and_health_are_typed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_body(
            r#"{"total_jobs": 547, "companies": 52, "sdg_goals": 15, "favorites": 4, "applications": 8, "profile_views": 143}"#,
        )
        .create_async()
        .await;
    let _m = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "healthy", "version": "3.3.0", "features": ["Auto-Geo"]}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .unwrap();

    let stats = client.system().stats().await.unwrap();
    assert_eq!(stats.total_jobs, 547);
    assert_eq!(stats.companies, 52);
    assert_eq!(stats.profile_views, Some(143));

    let health = client.system().health().await.unwrap();
    assert!(health.is_healthy());
}

#[tokio::test]
async fn wrapper_errors_are_normalized_too() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .build()
        .unwrap();

    let err = client
        .auth()
        .login(&LoginRequest::new("demo", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn applications_list_is_typed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/api/users/applications")
        .with_status(200)
        .with_body(
            r#"[
                {"application_id": 21, "job_id": 3, "status": "applied", "applied_at": "2025-11-02T10:15:00Z"},
                {"application_id": 34, "job_id": 9, "status": "shortlisted"}
            ]"#,
        )
        .create_async()
        .await;

    let client = ApiClientBuilder::new()
        .base_url(server.url())
        .token("jwt-token")
        .build()
        .unwrap();

    let applications = client.jobs().applications().await.unwrap();
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].status.as_deref(), Some("applied"));
    assert!(applications[1].applied_at.is_none());
}
