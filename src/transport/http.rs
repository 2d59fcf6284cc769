use crate::client::RequestConfig;
use crate::config::ClientConfig;
use crate::error::{self, ApiError};
use crate::Result;
use arc_swap::ArcSwapOption;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Correlation header stamped on every outgoing request. The backend may
/// ignore it; applications use it to link client logs to server logs.
const REQUEST_ID_HEADER: &str = "x-client-request-id";

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: ArcSwapOption<String>,
}

impl HttpTransport {
    /// Build a transport from the given configuration.
    ///
    /// Fails with a request-construction error before any I/O when the base
    /// URL does not parse, the timeout is zero, or a default header is not a
    /// legal header name/value.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(ApiError::request)?;

        if config.timeout.is_zero() {
            return Err(ApiError::request("timeout must be positive"));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(ApiError::request)?;
            let value = HeaderValue::from_str(value).map_err(ApiError::request)?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::request)?;

        Ok(Self {
            client,
            base_url,
            token: ArcSwapOption::empty(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the held session token. Subsequent requests carry
    /// `Authorization: Bearer <token>`; requests already dispatched keep the
    /// snapshot they were built with.
    pub fn set_token(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
    }

    /// Drop the held session token. Idempotent.
    pub fn clear_token(&self) {
        self.token.store(None);
    }

    pub fn has_token(&self) -> bool {
        self.token.load().is_some()
    }

    /// Issue a request with an optional JSON body and decode the 2xx response.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        let (mut req, request_id) = self.prepare(method, path, config);
        if let Some(body) = body {
            req = req.json(&body);
        }
        self.dispatch(req, path, &request_id).await
    }

    /// Issue a request with a form-urlencoded body (OAuth2 token endpoint).
    pub async fn execute_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        let (req, request_id) = self.prepare(method, path, config);
        self.dispatch(req.form(form), path, &request_id).await
    }

    /// Issue a multipart POST (resume upload).
    pub async fn execute_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        let (req, request_id) = self.prepare(Method::POST, path, config);
        self.dispatch(req.multipart(form), path, &request_id).await
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> (reqwest::RequestBuilder, String) {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, url);

        // Token snapshot at dispatch time; set_token/clear_token during the
        // request do not affect it.
        if let Some(token) = self.token.load_full() {
            req = req.bearer_auth(token.as_str());
        }
        req = req.header(REQUEST_ID_HEADER, request_id.as_str());

        if let Some(cfg) = config {
            for (name, value) in &cfg.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            if !cfg.query.is_empty() {
                req = req.query(&cfg.query);
            }
            if let Some(timeout) = cfg.timeout {
                req = req.timeout(timeout);
            }
        }

        (req, request_id)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        path: &str,
        request_id: &str,
    ) -> Result<T> {
        let start = Instant::now();
        let resp = req.send().await.map_err(ApiError::from)?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            info!(
                http_status = status.as_u16(),
                endpoint = path,
                request_id = request_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "green-matchers-api request failed"
            );
            return Err(ApiError::server(status.as_u16(), error_message(&body)));
        }

        debug!(
            http_status = status.as_u16(),
            endpoint = path,
            request_id = request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "green-matchers-api request completed"
        );

        resp.json::<T>().await.map_err(ApiError::from)
    }
}

/// Pull a display-ready message out of a non-2xx response body.
///
/// The web frontend historically read `error`; the FastAPI backend emits
/// `detail`. Check both, fall back to the fixed generic message. A
/// non-string `detail` (validation errors arrive as a list) is serialized
/// verbatim so nothing is lost.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return error::GENERIC_SERVER_ERROR.to_string();
    };

    if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
        return msg.to_string();
    }
    match value.get("detail") {
        Some(detail) => detail
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| detail.to_string()),
        None => error::GENERIC_SERVER_ERROR.to_string(),
    }
}
