//! Result resolution: live backend call with guaranteed simulated fallback.
//!
//! The two steps are deliberately separate: `try_live` returns an optional
//! result and `simulate` always produces one, so the fallback policy is
//! testable apart from the transport.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;

use searchbot_core::config::SearchbotConfig;
use searchbot_core::error::Result;
use searchbot_core::search::{PriorityLevel, SearchRequest, SearchResolver, SearchResult};

use crate::api_client::ApiClient;
use crate::templates::template_for_category;

/// Simulated research latency for urgent requests.
pub const URGENT_DELAY: Duration = Duration::from_millis(2000);
/// Simulated research latency for normal and low priority requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3500);

const STEP_ID_SUFFIX_LEN: usize = 4;

/// Generates results locally from the canned templates.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSearchResolver;

impl SimulatedSearchResolver {
    pub fn new() -> Self {
        Self
    }

    /// Produces a template result after an artificial delay scaled to the
    /// declared priority. Step identifiers get a short random suffix so
    /// repeated runs of one template never collide across history records.
    pub async fn simulate(&self, request: &SearchRequest) -> SearchResult {
        let delay = match request.priority {
            PriorityLevel::Urgent => URGENT_DELAY,
            PriorityLevel::Normal | PriorityLevel::Low => DEFAULT_DELAY,
        };
        tokio::time::sleep(delay).await;

        let mut result = template_for_category(&request.category);
        for step in &mut result.steps {
            step.id = format!("{}-{}", step.id, random_suffix());
        }
        result
    }
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STEP_ID_SUFFIX_LEN)
        .map(char::from)
        .collect()
}

/// The production resolver: live backend when enabled, simulation otherwise
/// or on any live failure. Never returns an error, so the session always
/// reaches a terminal state.
pub struct FallbackSearchResolver {
    api: ApiClient,
    simulated: SimulatedSearchResolver,
    config: SearchbotConfig,
}

impl FallbackSearchResolver {
    pub fn new(config: SearchbotConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config.clone())?,
            simulated: SimulatedSearchResolver::new(),
            config,
        })
    }

    /// Attempts the live backend. Every failure degrades to `None` so the
    /// caller falls through to simulation.
    async fn try_live(&self, request: &SearchRequest) -> Option<SearchResult> {
        match self.api.search(request).await {
            Ok(result) => {
                tracing::info!("live search succeeded for request {}", request.id);
                Some(result)
            }
            Err(err) => {
                tracing::warn!(
                    "live search failed for request {}, falling back to simulation: {}",
                    request.id,
                    err
                );
                None
            }
        }
    }
}

#[async_trait]
impl SearchResolver for FallbackSearchResolver {
    async fn resolve(&self, request: &SearchRequest) -> Result<SearchResult> {
        if self.config.live_search_enabled() {
            if let Some(result) = self.try_live(request).await {
                return Ok(result);
            }
        } else {
            tracing::debug!(
                "live search disabled, simulating result for request {}",
                request.id
            );
        }

        Ok(self.simulated.simulate(request).await)
    }
}
