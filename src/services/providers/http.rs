/// HTTP client for the recommendation service
///
/// API: `GET {base}/recommend?user_id=<integer>` returns a JSON array of
/// `{Book_ID, Book_Title, Recommendation_Score}` objects on success. Error
/// responses carry `{"error": "..."}`, which is only ever logged.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::Config,
    error::{RecommendationError, RecommendationResult},
    models::{ResultSet, UserId},
    services::providers::RecommendationProvider,
};

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RecommendationResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        tracing::info!(
            base_url = %base_url,
            timeout_ms = timeout.as_millis() as u64,
            "Recommendation service client configured"
        );

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> RecommendationResult<Self> {
        Self::new(config.service_base_url.clone(), config.request_timeout())
    }

    fn endpoint(&self) -> String {
        format!("{}/recommend", self.base_url)
    }

    /// Pulls the `error` field out of a failure body, falling back to the raw text
    fn error_detail(body: &str) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn recommend(&self, user_id: UserId) -> RecommendationResult<ResultSet> {
        let response = self
            .http_client
            .get(self.endpoint())
            .query(&[("user_id", user_id.get())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendationError::Service {
                status,
                detail: Self::error_detail(&body),
            });
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation service response");

        let results: ResultSet = serde_json::from_str(&response_text)?;

        tracing::info!(
            user_id = %user_id,
            results = results.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
