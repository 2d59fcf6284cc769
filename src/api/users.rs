use crate::client::ApiClient;
use crate::endpoints;
use crate::types::user::{ProfileBundle, ProfileUpdate};
use crate::Result;

/// Profile read/update and resume upload.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn profile(&self) -> Result<ProfileBundle> {
        self.client.get(endpoints::USER_PROFILE, None).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<serde_json::Value> {
        self.client
            .post(endpoints::USER_PROFILE, Some(update), None)
            .await
    }

    /// Upload a resume as multipart form data. `filename` is what the backend
    /// stores; `bytes` is the file content.
    pub async fn upload_resume(
        &self,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<serde_json::Value> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.into());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.client
            .post_multipart(endpoints::UPLOAD_RESUME, form, None)
            .await
    }
}
