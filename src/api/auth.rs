use crate::client::ApiClient;
use crate::endpoints;
use crate::types::auth::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};
use crate::Result;

/// Registration and login.
///
/// Neither call mutates the client's token: the embedding application decides
/// when to pass the issued `access_token` to [`ApiClient::set_token`] and how
/// to persist it.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.client
            .post(endpoints::REGISTER, Some(request), None)
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        self.client.post(endpoints::LOGIN, Some(request), None).await
    }

    /// OAuth2 password-grant variant of [`login`](Self::login), form-encoded
    /// as the backend's `/token` endpoint expects.
    pub async fn token(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("scope", ""),
        ];
        self.client
            .post_form(endpoints::OAUTH_TOKEN, &form, None)
            .await
    }
}
