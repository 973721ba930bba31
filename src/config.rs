//! Configuration module

use crate::constants;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scoring endpoint base URL (no trailing slash)
    pub api_url: String,

    /// Request timeout in seconds; `None` waits until the transport resolves
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: normalize_url(&constants::get_api_url()),
            request_timeout_secs: constants::get_timeout_secs(),
        }
    }

    /// Override the base URL (command line flag wins over environment)
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = normalize_url(url);
        }
        self
    }

    /// Full URL for a route such as `/predict`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn normalize_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        constants::DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let config = Config::default().with_api_url(Some("http://scoring:9000/"));
        assert_eq!(config.api_url, "http://scoring:9000");
        assert_eq!(config.endpoint("/predict"), "http://scoring:9000/predict");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        let config = Config::default().with_api_url(Some("   "));
        assert_eq!(config.api_url, constants::DEFAULT_API_URL);
    }

    #[test]
    fn test_no_override_keeps_value() {
        let config = Config {
            api_url: "http://a".to_string(),
            request_timeout_secs: Some(5),
        }
        .with_api_url(None);
        assert_eq!(config.api_url, "http://a");
        assert_eq!(config.request_timeout_secs, Some(5));
    }
}
