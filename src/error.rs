use thiserror::Error;

/// Normalized error produced for every failed API call.
///
/// All failure origins collapse into one shape; callers distinguish them only
/// by the presence of a status code and by message content:
///
/// - **Server error** - the backend responded with a non-2xx status.
///   `status` is `Some`, `message` comes from the response body's `error` or
///   `detail` field when present.
/// - **No response** - the request went out but nothing came back (timeout,
///   connection refused, DNS failure, offline). `status` is `None`.
/// - **Request construction** - the call failed before any network I/O
///   (malformed URL, body serialization). `status` is `None`, `message`
///   carries the underlying failure description.
///
/// The message is always suitable for direct display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// HTTP status code, present only when the server actually responded.
    pub status: Option<u16>,
}

pub(crate) const GENERIC_SERVER_ERROR: &str = "Server error occurred";
pub(crate) const NO_RESPONSE_MESSAGE: &str =
    "No response from server. Please check your connection.";

impl ApiError {
    /// The server responded with a non-2xx status.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// The request was sent but no response arrived.
    pub fn no_response() -> Self {
        Self {
            message: NO_RESPONSE_MESSAGE.to_string(),
            status: None,
        }
    }

    /// The call failed locally, before any network I/O.
    pub fn request(detail: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Request setup error: {detail}"),
            status: None,
        }
    }

    /// True when the server responded with an error status.
    pub fn is_server_error(&self) -> bool {
        self.status.is_some()
    }

    /// True when the failure never produced a server response.
    pub fn is_no_response(&self) -> bool {
        self.status.is_none()
    }

    /// True for a 401 response; callers use this to drop their session and
    /// return to the login flow.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() {
            ApiError::no_response()
        } else if e.is_builder() || e.is_body() || e.is_decode() {
            ApiError::request(e)
        } else {
            // Sent but died without a usable response (protocol errors,
            // redirect loops, connection reset mid-flight).
            ApiError::no_response()
        }
    }
}
