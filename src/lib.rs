//! # green-matchers-api
//!
//! Shared API client for the Green Matchers job-matching platform - the single
//! point of outbound HTTP communication for the web and mobile applications.
//!
//! ## Overview
//!
//! The platform's frontends render job listings, dashboards, career-path
//! visualizations and authentication flows; everything non-trivial (semantic
//! search, recommendation ranking, translation, persistence) lives behind the
//! backend's REST API. This crate consolidates the request/response/error
//! handling that used to be copy-pasted across clients into one library:
//!
//! - **Verb-based dispatch**: GET/POST/PUT/PATCH/DELETE against a configurable
//!   base URL, one network attempt per call, no implicit retry.
//! - **Bearer authentication**: an opaque session token attached to every
//!   outgoing request while set, cleared on logout.
//! - **Uniform errors**: transport-level, server-level and request-construction
//!   failures all surface as one [`ApiError`] shape with a display-ready
//!   message and a status code only when the server actually responded.
//! - **Typed endpoints**: serde models and thin wrappers for every endpoint
//!   group the applications consume (auth, jobs, careers, vector search,
//!   translation, users, system).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use green_matchers_api::ApiClientBuilder;
//! use green_matchers_api::types::LoginRequest;
//!
//! #[tokio::main]
//! async fn main() -> green_matchers_api::Result<()> {
//!     let client = ApiClientBuilder::new()
//!         .base_url("http://localhost:8000")
//!         .build()?;
//!
//!     let session = client.auth().login(&LoginRequest::new("demo", "secret")).await?;
//!     client.set_token(session.access_token);
//!
//!     let stats = client.system().stats().await?;
//!     println!("{} jobs from {} companies", stats.total_jobs, stats.companies);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `ApiClient`, builder and per-call request configuration |
//! | [`transport`] | reqwest-backed HTTP dispatch and error normalization |
//! | [`config`] | Client configuration and environment overrides |
//! | [`endpoints`] | Consolidated backend endpoint path table |
//! | [`types`] | Request/response models per endpoint group |
//! | [`api`] | Typed per-domain wrappers over the verb methods |

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, ApiClientBuilder, RequestConfig};
pub use config::ClientConfig;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type for the library
pub mod error;
pub use error::ApiError;
