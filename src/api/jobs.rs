use crate::client::ApiClient;
use crate::endpoints;
use crate::types::job::{
    Application, JobApplyRequest, JobApplyResponse, JobSearchRequest, JobSearchResponse,
};
use crate::Result;

/// Job search and applications. All operations require an authenticated
/// client.
pub struct JobsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> JobsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, request: &JobSearchRequest) -> Result<JobSearchResponse> {
        self.client
            .post(endpoints::JOB_SEARCH, Some(request), None)
            .await
    }

    pub async fn apply(&self, request: &JobApplyRequest) -> Result<JobApplyResponse> {
        self.client
            .post(endpoints::JOB_APPLY, Some(request), None)
            .await
    }

    pub async fn applications(&self) -> Result<Vec<Application>> {
        self.client.get(endpoints::JOB_APPLICATIONS, None).await
    }
}
