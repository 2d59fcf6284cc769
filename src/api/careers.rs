use crate::client::ApiClient;
use crate::endpoints;
use crate::types::career::{
    CareerPathRequest, CareerRecommendationsRequest, CareerRecommendationsResponse,
};
use crate::Result;

/// Career recommendations and progression.
pub struct CareersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CareersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn recommendations(
        &self,
        request: &CareerRecommendationsRequest,
    ) -> Result<CareerRecommendationsResponse> {
        self.client
            .post(endpoints::CAREER_RECOMMENDATIONS, Some(request), None)
            .await
    }

    /// Progression data for the career-path visualization. The response is
    /// chart-shaped and ad hoc, so it is returned as raw JSON.
    pub async fn progression(&self, request: &CareerPathRequest) -> Result<serde_json::Value> {
        self.client
            .post(endpoints::CAREER_PATH, Some(request), None)
            .await
    }
}
