use crate::client::ApiClient;
use crate::endpoints;
use crate::types::translate::{LanguagesResponse, TranslateRequest, TranslationResult};
use crate::Result;

/// Text translation and the supported-language list.
pub struct TranslateApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TranslateApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslationResult> {
        self.client
            .post(endpoints::TRANSLATE, Some(request), None)
            .await
    }

    pub async fn languages(&self) -> Result<LanguagesResponse> {
        self.client.get(endpoints::LANGUAGES, None).await
    }
}
