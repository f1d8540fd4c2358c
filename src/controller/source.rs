use crate::error::AppError;
use crate::model::HoleScores;
use async_trait::async_trait;
use reqwest::{Client, Url};

use super::remote::check_status;

/// The service rounds were originally recorded in.
#[async_trait]
pub trait SourceFeed: Send + Sync {
    /// One page of a golfer's round feed as raw HTML. `wave` 0 is the newest page.
    async fn round_feed(&self, source_user_id: &str, wave: u32) -> Result<String, AppError>;

    /// Strokes per hole for one recorded round.
    async fn round_score(&self, round_id: u64) -> Result<HoleScores, AppError>;
}

#[derive(Clone)]
pub struct HttpSourceFeed {
    base_url: String,
    client: Client,
}

impl HttpSourceFeed {
    #[must_use]
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// `{base}/feed/{user}` with the user id as a single escaped path segment.
    fn feed_url(&self, source_user_id: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Other(format!("invalid source url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| AppError::Other("source url cannot take a path".to_string()))?
            .pop_if_empty()
            .push("feed")
            .push(source_user_id);
        Ok(url)
    }
}

#[async_trait]
impl SourceFeed for HttpSourceFeed {
    #[tracing::instrument(skip(self), err)]
    async fn round_feed(&self, source_user_id: &str, wave: u32) -> Result<String, AppError> {
        let url = self.feed_url(source_user_id)?;
        let resp = self
            .client
            .get(url)
            .query(&[("wave", wave)])
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.text().await?)
    }

    #[tracing::instrument(skip(self), err)]
    async fn round_score(&self, round_id: u64) -> Result<HoleScores, AppError> {
        let url = format!("{}/rounds/{round_id}/scores", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<HoleScores>().await?)
    }
}
