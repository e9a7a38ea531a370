//! # Domain Types
//!
//! Catalog entries and the small value types around a transaction.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Service      │   │    Product      │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  cash           │       │
//! │  │  name           │   │  name           │   │  qris           │       │
//! │  │  price (Money)  │   │  price (Money)  │   │  transfer       │       │
//! │  │  duration       │   │  stock          │   │  (anything else)│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   1000 bps = 10% (the shop's flat rate)            │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog entries are immutable snapshots. Product stock is displayed but
//! never decremented by a sale.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Human label used on receipts: `10%`, `8.25%`, `12.5%`.
    pub fn percent_label(&self) -> String {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            format!("{}%", whole)
        } else {
            let frac = format!("{:02}", frac);
            format!("{}.{}%", whole, frac.trim_end_matches('0'))
        }
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::SHOP_TAX_RATE
    }
}

// =============================================================================
// Service
// =============================================================================

/// A bookable service (haircut, shave, ...). Selected at most once per
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole rupiah.
    pub price: Money,
    pub duration_minutes: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A retail product sold by quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in whole rupiah.
    pub price: Money,
    /// Units on the shelf. Informational only.
    pub stock: u32,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// The three known methods have fixed wire names. Anything else is carried
/// through untouched so the receipt prints exactly what was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Physical cash.
    #[default]
    Cash,
    /// QRIS (Indonesian standard QR payment).
    Qris,
    /// Direct bank transfer.
    BankTransfer,
    /// Any other value supplied by the client.
    Other(String),
}

impl PaymentMethod {
    /// The wire/receipt string for this method.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Qris => "qris",
            PaymentMethod::BankTransfer => "transfer",
            PaymentMethod::Other(value) => value,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value {
            "cash" => PaymentMethod::Cash,
            "qris" => PaymentMethod::Qris,
            "transfer" => PaymentMethod::BankTransfer,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        PaymentMethod::from(value.as_str())
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(10.0).bps(), 1000);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_rate_default_is_shop_rate() {
        assert_eq!(TaxRate::default().bps(), 1000);
        assert_eq!(TaxRate::zero().bps(), 0);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(TaxRate::from_bps(1000).percent_label(), "10%");
        assert_eq!(TaxRate::from_bps(825).percent_label(), "8.25%");
        assert_eq!(TaxRate::from_bps(1250).percent_label(), "12.5%");
        assert_eq!(TaxRate::from_bps(0).percent_label(), "0%");
    }

    #[test]
    fn test_payment_method_round_trip_names() {
        assert_eq!(PaymentMethod::from("cash"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from("qris"), PaymentMethod::Qris);
        assert_eq!(PaymentMethod::from("transfer"), PaymentMethod::BankTransfer);
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "transfer");
    }

    #[test]
    fn test_payment_method_passes_through_unknown_values() {
        let method = PaymentMethod::from("voucher");
        assert_eq!(method, PaymentMethod::Other("voucher".to_string()));
        assert_eq!(method.to_string(), "voucher");
    }

    #[test]
    fn test_payment_method_serializes_as_string() {
        let json = serde_json::to_string(&PaymentMethod::Qris).unwrap();
        assert_eq!(json, "\"qris\"");

        let parsed: PaymentMethod = serde_json::from_str("\"e-wallet\"").unwrap();
        assert_eq!(parsed.as_str(), "e-wallet");
    }
}
