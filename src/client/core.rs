use crate::api;
use crate::client::request::RequestConfig;
use crate::error::ApiError;
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Single point of outbound HTTP communication with the Green Matchers
/// backend.
///
/// One instance is constructed at application startup and injected into every
/// screen; no caller builds its own headers or base URL. The client holds the
/// session token (Anonymous <-> Authenticated, toggled by [`set_token`] /
/// [`clear_token`]) and normalizes every failure into [`ApiError`].
///
/// The client never retries, never queues, never caches. A failed request
/// leaves configuration and token unchanged and ready for the next call.
///
/// [`set_token`]: ApiClient::set_token
/// [`clear_token`]: ApiClient::clear_token
#[derive(Clone, Debug)]
pub struct ApiClient {
    transport: Arc<HttpTransport>,
}

impl ApiClient {
    /// Build a client with default configuration (environment overrides
    /// applied). Use [`crate::ApiClientBuilder`] for anything custom.
    pub fn new() -> Result<Self> {
        crate::client::builder::ApiClientBuilder::new().build()
    }

    pub(crate) fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Replace the held session token. All subsequent requests carry
    /// `Authorization: Bearer <token>`. The token is opaque; no format
    /// validation is performed.
    pub fn set_token(&self, token: impl Into<String>) {
        self.transport.set_token(token);
    }

    /// Remove the held session token. Subsequent requests omit the
    /// Authorization header. Idempotent.
    pub fn clear_token(&self) {
        self.transport.clear_token();
    }

    pub fn has_token(&self) -> bool {
        self.transport.has_token()
    }

    /// GET `base_url + path`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        self.transport.execute(Method::GET, path, None, config).await
    }

    /// POST `base_url + path` with an optional JSON body.
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serialize_body(body)?;
        self.transport.execute(Method::POST, path, body, config).await
    }

    /// PUT `base_url + path` with an optional JSON body.
    pub async fn put<B, T>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serialize_body(body)?;
        self.transport.execute(Method::PUT, path, body, config).await
    }

    /// PATCH `base_url + path` with an optional JSON body.
    pub async fn patch<B, T>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serialize_body(body)?;
        self.transport.execute(Method::PATCH, path, body, config).await
    }

    /// DELETE `base_url + path`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        self.transport
            .execute(Method::DELETE, path, None, config)
            .await
    }

    /// GET returning the raw JSON value, for callers without a typed model.
    pub async fn get_value(&self, path: &str) -> Result<serde_json::Value> {
        self.get(path, None).await
    }

    /// POST a form-urlencoded body (OAuth2 token endpoint).
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        self.transport
            .execute_form(Method::POST, path, form, config)
            .await
    }

    /// POST a multipart form (file uploads).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        config: Option<&RequestConfig>,
    ) -> Result<T> {
        self.transport.execute_multipart(path, form, config).await
    }

    // Typed per-domain wrappers.

    pub fn auth(&self) -> api::AuthApi<'_> {
        api::AuthApi::new(self)
    }

    pub fn jobs(&self) -> api::JobsApi<'_> {
        api::JobsApi::new(self)
    }

    pub fn careers(&self) -> api::CareersApi<'_> {
        api::CareersApi::new(self)
    }

    pub fn vector(&self) -> api::VectorApi<'_> {
        api::VectorApi::new(self)
    }

    pub fn translate(&self) -> api::TranslateApi<'_> {
        api::TranslateApi::new(self)
    }

    pub fn users(&self) -> api::UsersApi<'_> {
        api::UsersApi::new(self)
    }

    pub fn system(&self) -> api::SystemApi<'_> {
        api::SystemApi::new(self)
    }
}

/// Serialize a typed body up front so serialization failures surface as
/// request-construction errors before any network I/O.
fn serialize_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<serde_json::Value>> {
    body.map(|b| serde_json::to_value(b).map_err(ApiError::request))
        .transpose()
}
