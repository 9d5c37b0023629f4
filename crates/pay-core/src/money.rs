//! # Money Types
//!
//! Monetary amounts in the provider's wire shape: an integer count of minor
//! units (cents for EUR) plus the minor-unit exponent.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217, upper-case on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    EUR,
    GBP,
    USD,
    CHF,
    PLN,
    SEK,
    CLP,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::CHF => "CHF",
            Currency::PLN => "PLN",
            Currency::SEK => "SEK",
            Currency::CLP => "CLP",
        }
    }

    /// Returns the minor-unit exponent for this currency
    /// (CLP has 0 decimals, the others have 2)
    pub fn minor_unit(&self) -> u8 {
        match self {
            Currency::CLP => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount to an integer count of minor units.
    ///
    /// Rounding policy: round-half-away-from-zero as computed by
    /// `f64::round()` on the scaled product. Note the product itself is a
    /// binary float, so e.g. `12.345` EUR scales to `1234.4999…` and lands
    /// on 1234.
    pub fn to_minor_units(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.minor_unit() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from minor units back to a decimal amount
    pub fn from_minor_units(&self, value: i64) -> f64 {
        let divisor = 10_f64.powi(self.minor_unit() as i32);
        value as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monetary amount in the provider's total_amount wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Currency code
    pub currency: Currency,
    /// Minor-unit exponent (2 for EUR means value is in hundredths)
    pub minor_unit: u8,
    /// Amount as an integer count of minor units
    pub value: i64,
}

impl Money {
    /// Create from a decimal amount, converting to minor units
    pub fn from_major_units(amount: f64, currency: Currency) -> Self {
        Self {
            currency,
            minor_unit: currency.minor_unit(),
            value: currency.to_minor_units(amount),
        }
    }

    /// Create directly from a minor-unit count
    pub fn from_minor_units(value: i64, currency: Currency) -> Self {
        Self {
            currency,
            minor_unit: currency.minor_unit(),
            value,
        }
    }

    /// Format for display (e.g., "10.00 EUR")
    pub fn display(&self) -> String {
        if self.minor_unit == 0 {
            format!("{} {}", self.value, self.currency)
        } else {
            format!(
                "{:.width$} {}",
                self.currency.from_minor_units(self.value),
                self.currency,
                width = self.minor_unit as usize
            )
        }
    }
}
