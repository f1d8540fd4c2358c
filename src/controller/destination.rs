use crate::error::AppError;
use crate::model::{Course, Facility, SubmissionPayload, SubmitOutcome};
use async_trait::async_trait;
use reqwest::Client;

use super::remote::check_status;

/// The service that owns the facility/course/tee catalogue and accepts scores.
#[async_trait]
pub trait DestinationApi: Send + Sync {
    async fn search_facilities(&self, name: &str, limit: usize)
    -> Result<Vec<Facility>, AppError>;

    async fn courses(&self, facility_id: i64, owner_id: i64) -> Result<Vec<Course>, AppError>;

    async fn post_score(&self, payload: &SubmissionPayload) -> Result<SubmitOutcome, AppError>;
}

#[derive(Clone)]
pub struct HttpDestinationApi {
    base_url: String,
    client: Client,
}

impl HttpDestinationApi {
    #[must_use]
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl DestinationApi for HttpDestinationApi {
    #[tracing::instrument(skip(self), err)]
    async fn search_facilities(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<Facility>, AppError> {
        let url = format!("{}/facilities/search", self.base_url);
        let limit = limit.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[("name", name), ("limit", limit.as_str())])
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<Vec<Facility>>().await?)
    }

    #[tracing::instrument(skip(self), err)]
    async fn courses(&self, facility_id: i64, owner_id: i64) -> Result<Vec<Course>, AppError> {
        let url = format!("{}/facilities/{facility_id}/courses", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("owner_id", owner_id)])
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<Vec<Course>>().await?)
    }

    #[tracing::instrument(skip(self, payload), fields(round = %payload.source_round_id), err)]
    async fn post_score(&self, payload: &SubmissionPayload) -> Result<SubmitOutcome, AppError> {
        let url = format!("{}/scores", self.base_url);
        let resp = self.client.post(&url).json(payload).send().await?;
        let resp = check_status(resp).await?;
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(SubmitOutcome::success());
        }
        Ok(serde_json::from_str::<SubmitOutcome>(&body)?)
    }
}
