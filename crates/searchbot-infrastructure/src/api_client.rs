//! HTTP client for the research backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use searchbot_core::config::SearchbotConfig;
use searchbot_core::error::{Result, SearchbotError};
use searchbot_core::search::{SearchRequest, SearchResult};

/// Request timeout. Generous because the backend may run AI research
/// pipelines that take tens of seconds to answer.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Payload of the backend health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Client for the backend search contract: `POST /search` and `GET /health`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: SearchbotConfig,
}

impl ApiClient {
    /// Creates a client bound to the configured base URL.
    pub fn new(config: SearchbotConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Submits a search request to the backend and returns its result.
    ///
    /// Any transport failure, timeout, or non-2xx status maps to
    /// [`SearchbotError::Backend`]; the caller decides whether to degrade
    /// to simulation.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let url = self.config.search_endpoint();
        tracing::debug!("dispatching search {} to {}", request.id, url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchbotError::backend(
                Some(status.as_u16()),
                format!("search endpoint returned {}: {}", status, body),
            ));
        }

        Ok(response.json::<SearchResult>().await?)
    }

    /// Queries the backend health endpoint. Used by external tooling, not
    /// by the request lifecycle.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.config.health_endpoint()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchbotError::backend(
                Some(status.as_u16()),
                "health endpoint returned non-success status",
            ));
        }

        Ok(response.json::<HealthStatus>().await?)
    }
}
