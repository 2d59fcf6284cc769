use crate::client::ApiClient;
use crate::endpoints;
use crate::types::career::{CareerRecommendationsRequest, CareerRecommendationsResponse};
use crate::types::job::{JobSearchRequest, JobSearchResponse};
use crate::Result;

/// Semantic/vector variants of job search and career recommendations. Same
/// request and response shapes as the keyword endpoints; the backend ranks by
/// embedding distance instead.
pub struct VectorApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VectorApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobSearchResponse> {
        self.client
            .post(endpoints::VECTOR_JOB_SEARCH, Some(request), None)
            .await
    }

    pub async fn recommend_careers(
        &self,
        request: &CareerRecommendationsRequest,
    ) -> Result<CareerRecommendationsResponse> {
        self.client
            .post(endpoints::VECTOR_CAREER_RECOMMEND, Some(request), None)
            .await
    }
}
