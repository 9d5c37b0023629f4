//! # Payment Error Types
//!
//! Typed error handling for the terminal-pay façade.
//! All gateway and validation operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all reader and checkout operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (caller-induced)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Upstream failures of any kind surface as 500: the caller only ever
    /// sees a generic message, the detail goes to the server log.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::Provider { .. } => 500,
            PaymentError::Network(_) => 500,
            PaymentError::Serialization(_) => 500,
        }
    }

    /// Returns true if the caller caused this error (4xx family)
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::InvalidRequest(_))
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
