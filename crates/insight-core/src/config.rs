//! Analysis service client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Connection settings for the analysis service and the demo path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root; `/analyze` and `/health` are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Simulated latency of the demo payload.
    #[serde(default = "default_demo_latency_ms")]
    pub demo_latency_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_demo_latency_ms() -> u64 {
    1500
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            demo_latency_ms: default_demo_latency_ms(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `INSIGHT_API_URL`, `INSIGHT_TIMEOUT_SECS` and
    /// `INSIGHT_DEMO_LATENCY_MS`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("INSIGHT_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = lookup("INSIGHT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout_secs = secs;
        }
        if let Some(ms) = lookup("INSIGHT_DEMO_LATENCY_MS").and_then(|v| v.parse().ok()) {
            config.demo_latency_ms = ms;
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_demo_latency(mut self, latency: Duration) -> Self {
        self.demo_latency_ms = latency.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn demo_latency(&self) -> Duration {
        Duration::from_millis(self.demo_latency_ms)
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.demo_latency(), Duration::from_millis(1500));
        assert_eq!(config.endpoint("analyze"), "http://localhost:5000/analyze");
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "INSIGHT_API_URL" => Some("http://analysis.internal:8080/".into()),
            "INSIGHT_TIMEOUT_SECS" => Some("30".into()),
            "INSIGHT_DEMO_LATENCY_MS" => Some("not a number".into()),
            _ => None,
        });
        assert_eq!(config.endpoint("/health"), "http://analysis.internal:8080/health");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.demo_latency_ms, 1500);
    }

    #[test]
    fn test_partial_json() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
