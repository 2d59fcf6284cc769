//! Consolidated endpoint table for the Green Matchers backend.
//!
//! One authoritative list of relative paths; no caller constructs its own.
//! Paths are joined onto the configured base URL at dispatch time.

// Authentication
pub const REGISTER: &str = "/api/auth/register";
pub const LOGIN: &str = "/api/auth/login";
/// OAuth2 form-encoded alias of [`LOGIN`], also served by the backend.
pub const OAUTH_TOKEN: &str = "/token";

// Career services
pub const CAREER_RECOMMENDATIONS: &str = "/api/career/recommendations";
pub const CAREER_PATH: &str = "/api/career/progression";

// Job services
pub const JOB_SEARCH: &str = "/api/jobs/search";
pub const JOB_APPLY: &str = "/api/jobs/apply";
pub const JOB_APPLICATIONS: &str = "/api/users/applications";

// Vector AI services
pub const VECTOR_JOB_SEARCH: &str = "/api/vector/jobs/search";
pub const VECTOR_CAREER_RECOMMEND: &str = "/api/vector/careers/recommend";

// Translation services
pub const TRANSLATE: &str = "/api/translate";
pub const LANGUAGES: &str = "/api/languages";

// User services
pub const USER_PROFILE: &str = "/api/users/profile";
pub const UPLOAD_RESUME: &str = "/api/users/upload-resume";

// System services
pub const HEALTH_CHECK: &str = "/health";
pub const STATS: &str = "/stats";
