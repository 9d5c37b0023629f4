//! # Reader Types
//!
//! Request types for the card-reader operations. The reader and checkout
//! records themselves are owned by the payment provider and pass through
//! this service verbatim; only the outbound requests are typed here.

use crate::error::{PaymentError, PaymentResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A validated request to pair a physical card reader with a merchant account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderRegistration {
    /// Pairing code shown on the reader's display
    pub pairing_code: String,

    /// Display name for the reader
    pub name: String,
}

impl ReaderRegistration {
    /// Build a registration from raw input, trimming whitespace.
    ///
    /// Fails with `InvalidRequest` if either field trims to empty.
    pub fn new(pairing_code: &str, name: &str) -> PaymentResult<Self> {
        let pairing_code = pairing_code.trim();
        let name = name.trim();

        if pairing_code.is_empty() || name.is_empty() {
            return Err(PaymentError::InvalidRequest(
                "pairing_code and name are required".to_string(),
            ));
        }

        Ok(Self {
            pairing_code: pairing_code.to_string(),
            name: name.to_string(),
        })
    }
}

/// A checkout to be created against a specific reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderCheckout {
    /// Total amount to charge
    pub total_amount: Money,

    /// Human-readable description shown on the receipt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReaderCheckout {
    /// Create a checkout for the given amount
    pub fn new(total_amount: Money) -> Self {
        Self {
            total_amount,
            description: None,
        }
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
