use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation service (scheme, host and port)
    #[serde(default = "default_service_base_url")]
    pub service_base_url: String,

    /// Per-request timeout applied to recommendation calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Base URL used to build book cover image links
    #[serde(default = "default_cover_base_url")]
    pub cover_base_url: String,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_service_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_cover_base_url() -> String {
    "https://covers.openlibrary.org".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_base_url: default_service_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            cover_base_url: default_cover_base_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.service_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cover_base_url, "https://covers.openlibrary.org");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_vars(vars(&[
            ("SERVICE_BASE_URL", "http://localhost:8001"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.service_base_url, "http://localhost:8001");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = Config::from_vars(vars(&[("REQUEST_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }
}
