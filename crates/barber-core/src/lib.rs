//! # barber-core: Pure Business Logic for the Barbershop POS
//!
//! This crate holds the transaction core of the register: the cart, its
//! pricing, and the receipt that goes to the Bluetooth print bridge. Every
//! function is pure; there is no I/O anywhere in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Barbershop POS Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 barber-register (apps/register)                 │   │
//! │  │   stdin JSON ──► commands ──► RegisterState ──► stdout JSON     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barber-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │ pricing │ │ receipt │ │  print  │  │   │
//! │  │   │Service  │ │Transact.│ │ Totals  │ │ Lines   │ │PrintJob │  │   │
//! │  │   │Product  │ │ lines   │ │ tax     │ │ header  │ │ URI     │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entries, tax rate, payment method
//! - [`money`] - Integer rupiah amounts and currency formatting
//! - [`catalog`] - Catalog query interface and the shop's sample data
//! - [`cart`] - The in-progress transaction and its mutations
//! - [`pricing`] - Subtotal / tax / total derivation
//! - [`receipt`] - Printable receipt line sequence
//! - [`print`] - Bluetooth print bridge wire format and hand-off URI
//! - [`validation`] - Input checks used by the register
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use barber_core::catalog::{Catalog, InMemoryCatalog};
//! use barber_core::cart::Transaction;
//!
//! let catalog = InMemoryCatalog::sample();
//! let mut tx = Transaction::new();
//!
//! tx.toggle_service(catalog.service("1").unwrap());
//! let totals = tx.totals();
//!
//! assert_eq!(totals.subtotal.rupiah(), 75_000);
//! assert_eq!(totals.tax.rupiah(), 7_500);
//! assert_eq!(totals.total.rupiah(), 82_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod print;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartProductLine, Transaction};
pub use catalog::{Catalog, InMemoryCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyStyle, Money};
pub use pricing::Totals;
pub use receipt::{Receipt, ReceiptBuilder, ReceiptLine, ShopProfile};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The shop's flat sales tax: 10%.
pub const SHOP_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Maximum quantity of a single product line.
///
/// ## Business Reason
/// Prevents accidental over-ordering from a stuck "+" button.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Longest customer name accepted on a transaction.
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;
