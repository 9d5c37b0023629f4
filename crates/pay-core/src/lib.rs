//! # pay-core
//!
//! Core types and traits for the terminal-pay card-reader façade.
//!
//! This crate provides:
//! - `ReaderGateway` trait for the payment provider's reader API
//! - `ReaderRegistration` and `ReaderCheckout` request types
//! - `Money` and `Currency` for minor-unit amounts
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Currency, Money, ReaderCheckout, ReaderGateway};
//!
//! // Normalize a decimal amount into the provider's wire shape
//! let checkout = ReaderCheckout::new(Money::from_major_units(5.0, Currency::EUR))
//!     .with_description("Card reader checkout");
//!
//! // Trigger it on a reader through any gateway implementation
//! let record = gateway.create_reader_checkout(merchant_code, "rdr_abc", &checkout).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod money;
pub mod reader;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedReaderGateway, ReaderGateway};
pub use money::{Currency, Money};
pub use reader::{ReaderCheckout, ReaderRegistration};
