//! # SumUp Configuration
//!
//! Configuration management for the SumUp integration.
//! The API credential is loaded from environment variables.

use pay_core::PaymentError;
use std::env;

/// Default SumUp API base URL
const DEFAULT_API_BASE_URL: &str = "https://api.sumup.com";

/// SumUp API configuration
#[derive(Debug, Clone)]
pub struct SumUpConfig {
    /// API key (created in the SumUp developer dashboard)
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl SumUpConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUMUP_API_KEY`
    ///
    /// Optional:
    /// - `SUMUP_API_BASE_URL` (defaults to the public SumUp API)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("SUMUP_API_KEY")
            .map_err(|_| PaymentError::Configuration("SUMUP_API_KEY not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "SUMUP_API_KEY is empty".to_string(),
            ));
        }

        let api_base_url =
            env::var("SUMUP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_key,
            api_base_url,
        })
    }

    /// Create config with an explicit key (for testing)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let config = SumUpConfig::new("sup_sk_abc123");
        assert_eq!(config.auth_header(), "Bearer sup_sk_abc123");
    }

    #[test]
    fn test_default_base_url() {
        let config = SumUpConfig::new("sup_sk_abc123");
        assert_eq!(config.api_base_url, "https://api.sumup.com");
    }

    #[test]
    fn test_base_url_override() {
        let config = SumUpConfig::new("sup_sk_abc123").with_api_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_from_env_missing_key() {
        env::remove_var("SUMUP_API_KEY");

        let result = SumUpConfig::from_env();
        assert!(result.is_err());
    }
}
