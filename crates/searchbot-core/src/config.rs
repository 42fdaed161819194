//! Runtime configuration for the search core.

use serde::{Deserialize, Serialize};

/// Placeholder backend host used when nothing is configured. Requests to it
/// fail fast, which routes resolution to the simulated path.
pub const DEFAULT_API_BASE_URL: &str = "https://api.searchbot-placeholder.com/v1";

/// Environment variable overriding the backend base URL.
pub const ENV_API_BASE_URL: &str = "SEARCHBOT_API_URL";
/// Environment variable forcing live search on ("true" to enable).
pub const ENV_ENABLE_LIVE_SEARCH: &str = "SEARCHBOT_ENABLE_LIVE_SEARCH";

/// Recognized configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchbotConfig {
    /// Base URL of the research backend.
    pub api_base_url: String,
    /// Forces live mode even off loopback.
    pub enable_live_search: bool,
}

impl Default for SearchbotConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_live_search: false,
        }
    }
}

impl SearchbotConfig {
    /// Builds the configuration from defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(ENV_API_BASE_URL).ok(),
            std::env::var(ENV_ENABLE_LIVE_SEARCH).ok(),
        )
    }

    /// Applies environment-shaped overrides on top of this configuration.
    /// The live-search flag is enabled only by the literal string "true".
    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        enable_live_search: Option<String>,
    ) -> Self {
        if let Some(url) = api_base_url
            && !url.trim().is_empty()
        {
            self.api_base_url = url;
        }
        if let Some(flag) = enable_live_search {
            self.enable_live_search = flag == "true";
        }
        self
    }

    /// Whether resolution should attempt the live backend: explicitly
    /// enabled, or the base URL targets a loopback address (local
    /// development backends are assumed reachable).
    pub fn live_search_enabled(&self) -> bool {
        self.enable_live_search
            || self.api_base_url.contains("localhost")
            || self.api_base_url.contains("127.0.0.1")
    }

    /// URL of the search endpoint.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search", self.api_base_url.trim_end_matches('/'))
    }

    /// URL of the health endpoint.
    pub fn health_endpoint(&self) -> String {
        format!("{}/health", self.api_base_url.trim_end_matches('/'))
    }
}
