//! # Application State
//!
//! Shared state for the Axum application: process configuration and the
//! reader-gateway handle. Everything here is read-only after startup.

use pay_core::{BoxedReaderGateway, PaymentError, PaymentResult};
use pay_sumup::SumUpReadersGateway;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Merchant code scoping all reader operations
    pub merchant_code: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// Required env vars:
    /// - `SUMUP_MERCHANT_CODE`
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();

        let merchant_code = std::env::var("SUMUP_MERCHANT_CODE").map_err(|_| {
            PaymentError::Configuration("SUMUP_MERCHANT_CODE not set".to_string())
        })?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            merchant_code,
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> PaymentResult<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|_| {
            PaymentError::Configuration(format!(
                "Invalid listen address {}:{}",
                self.host, self.port
            ))
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reader gateway handle
    pub gateway: BoxedReaderGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState wired to the SumUp gateway
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let gateway = SumUpReadersGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize SumUp gateway: {}", e))?;

        Ok(Self::with_gateway(Arc::new(gateway), config))
    }

    /// Create an AppState with an injected gateway (used by tests)
    pub fn with_gateway(gateway: BoxedReaderGateway, config: AppConfig) -> Self {
        Self { gateway, config }
    }

    /// The merchant code all gateway calls are scoped to
    pub fn merchant_code(&self) -> &str {
        &self.config.merchant_code
    }
}
