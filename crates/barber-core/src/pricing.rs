//! # Pricing
//!
//! Derives subtotal, tax and total from the cart's line items.
//!
//! ```text
//! subtotal = Σ service.price + Σ product.price × quantity
//! tax      = round_half_up(subtotal × rate)
//! total    = subtotal + tax
//! ```
//!
//! Totals are always recomputed from the full line list. Nothing in the
//! crate patches a running total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartProductLine;
use crate::money::Money;
use crate::types::{Service, TaxRate};

/// The three amounts printed at the bottom of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Prices a set of selected services and product lines.
///
/// An empty cart prices to all zeros.
pub fn compute_totals(services: &[Service], lines: &[CartProductLine], rate: TaxRate) -> Totals {
    let services_total: Money = services.iter().map(|s| s.price).sum();
    let products_total: Money = lines.iter().map(CartProductLine::line_total).sum();

    let subtotal = services_total + products_total;
    let tax = subtotal.calculate_tax(rate);

    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
