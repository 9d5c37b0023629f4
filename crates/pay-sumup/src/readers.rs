//! # SumUp Readers Gateway
//!
//! Implementation of `ReaderGateway` against the SumUp merchants/readers
//! REST API. Reader and checkout records are returned verbatim; this client
//! only shapes the outbound requests and translates failures.

use crate::config::SumUpConfig;
use async_trait::async_trait;
use pay_core::{
    PaymentError, PaymentResult, ReaderCheckout, ReaderGateway, ReaderRegistration,
};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// SumUp card-reader API client
pub struct SumUpReadersGateway {
    config: SumUpConfig,
    client: Client,
}

impl SumUpReadersGateway {
    /// Create a new gateway from config
    pub fn new(config: SumUpConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = SumUpConfig::from_env()?;
        Self::new(config)
    }

    fn readers_url(&self, merchant_code: &str) -> String {
        format!(
            "{}/v0.1/merchants/{}/readers",
            self.config.api_base_url, merchant_code
        )
    }

    fn checkout_url(&self, merchant_code: &str, reader_id: &str) -> String {
        format!(
            "{}/v0.1/merchants/{}/readers/{}/checkout",
            self.config.api_base_url, merchant_code, reader_id
        )
    }

    /// Read a response body, translating non-2xx statuses and unparseable
    /// bodies into typed errors.
    async fn parse_response(&self, response: Response) -> PaymentResult<Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("SumUp API error: status={}, body={}", status, body);

            // Parse the provider's error shape if possible
            if let Ok(error_response) = serde_json::from_str::<SumUpErrorResponse>(&body) {
                if let Some(message) = error_response.message() {
                    return Err(PaymentError::Provider {
                        provider: "sumup".to_string(),
                        message,
                    });
                }
            }

            return Err(PaymentError::Provider {
                provider: "sumup".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        // A created checkout can come back with an empty body on 204
        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse SumUp response: {}", e))
        })
    }
}

#[async_trait]
impl ReaderGateway for SumUpReadersGateway {
    #[instrument(skip(self))]
    async fn list_readers(&self, merchant_code: &str) -> PaymentResult<Value> {
        debug!("Listing readers for merchant {}", merchant_code);

        let response = self
            .client
            .get(self.readers_url(merchant_code))
            .header("Authorization", self.config.auth_header())
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    #[instrument(skip(self, registration), fields(reader_name = %registration.name))]
    async fn create_reader(
        &self,
        merchant_code: &str,
        registration: &ReaderRegistration,
    ) -> PaymentResult<Value> {
        let response = self
            .client
            .post(self.readers_url(merchant_code))
            .header("Authorization", self.config.auth_header())
            .json(registration)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let reader = self.parse_response(response).await?;

        info!(
            "Paired reader '{}' with merchant {}",
            registration.name, merchant_code
        );

        Ok(reader)
    }

    #[instrument(skip(self, checkout), fields(amount = %checkout.total_amount.display()))]
    async fn create_reader_checkout(
        &self,
        merchant_code: &str,
        reader_id: &str,
        checkout: &ReaderCheckout,
    ) -> PaymentResult<Value> {
        let response = self
            .client
            .post(self.checkout_url(merchant_code, reader_id))
            .header("Authorization", self.config.auth_header())
            .json(checkout)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let record = self.parse_response(response).await?;

        info!(
            "Created checkout of {} on reader {}",
            checkout.total_amount.display(),
            reader_id
        );

        Ok(record)
    }

    fn provider_name(&self) -> &'static str {
        "sumup"
    }
}

// =============================================================================
// SumUp API Types
// =============================================================================

/// Error body returned by the SumUp API.
///
/// The API is inconsistent across endpoints: some return
/// `{"message", "error_code"}`, older ones `{"error_message", "error_code"}`.
#[derive(Debug, Deserialize)]
struct SumUpErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

impl SumUpErrorResponse {
    fn message(&self) -> Option<String> {
        let text = self.message.as_ref().or(self.error_message.as_ref())?;
        match &self.error_code {
            Some(code) => Some(format!("{} ({})", text, code)),
            None => Some(text.clone()),
        }
    }
}
