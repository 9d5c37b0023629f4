//! # Reader Gateway Trait
//!
//! Capability trait for the payment provider's card-reader API.
//! The HTTP layer depends only on this trait, so the provider client can be
//! swapped for an in-process double in tests.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            ReaderGateway (trait)            │
//! │  ├── list_readers()                         │
//! │  ├── create_reader()                        │
//! │  ├── create_reader_checkout()               │
//! │  └── provider_name()                        │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!          │                         │
//!  ┌───────┴───────────┐   ┌─────────┴────────┐
//!  │SumUpReadersGateway│   │  test doubles    │
//!  └───────────────────┘   └──────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::reader::{ReaderCheckout, ReaderRegistration};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Core trait for the provider's card-reader operations.
///
/// Every operation is scoped to a merchant account via `merchant_code`.
/// Responses are the provider's payloads, passed through verbatim.
#[async_trait]
pub trait ReaderGateway: Send + Sync {
    /// List the readers registered to the merchant account.
    async fn list_readers(&self, merchant_code: &str) -> PaymentResult<Value>;

    /// Pair a new reader with the merchant account.
    ///
    /// # Arguments
    /// * `registration` - validated pairing code and display name
    ///
    /// # Returns
    /// The created reader record as the provider returns it.
    async fn create_reader(
        &self,
        merchant_code: &str,
        registration: &ReaderRegistration,
    ) -> PaymentResult<Value>;

    /// Trigger a checkout on a specific reader.
    ///
    /// # Arguments
    /// * `reader_id` - the provider-assigned reader identifier
    /// * `checkout` - amount and description to charge
    ///
    /// # Returns
    /// The created checkout record as the provider returns it.
    async fn create_reader_checkout(
        &self,
        merchant_code: &str,
        reader_id: &str,
        checkout: &ReaderCheckout,
    ) -> PaymentResult<Value>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway handle (dynamic dispatch)
pub type BoxedReaderGateway = Arc<dyn ReaderGateway>;
