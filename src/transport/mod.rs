//! HTTP dispatch layer.
//!
//! [`HttpTransport`] owns the reqwest client, the base URL and the session
//! token; everything above it (verb methods, typed wrappers) is a thin layer
//! over [`HttpTransport::execute`].

mod http;

pub use http::HttpTransport;
