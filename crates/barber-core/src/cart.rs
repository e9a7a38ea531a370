//! # Cart
//!
//! The transaction being rung up: who the customer is, which services and
//! products they are taking, and how they will pay.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Register Action          Method                    Cart Change         │
//! │  ───────────────          ──────                    ───────────         │
//! │                                                                         │
//! │  Tap service card ──────► toggle_service() ───────► add or remove      │
//! │                                                                         │
//! │  Tap "Add to Cart" ─────► add_product() ──────────► qty + 1 / new line │
//! │                                                                         │
//! │  Tap "+" / "-" / "x" ───► set_product_quantity() ─► qty = n / remove   │
//! │                                                                         │
//! │  Complete transaction ──► clear() ────────────────► back to empty      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A service appears at most once (matched by id), in selection order
//! - Product lines are unique by product id, in insertion order
//! - Every stored quantity is ≥ 1
//! - Totals are derived on demand, never stored

use serde::Serialize;

use crate::money::Money;
use crate::pricing::{self, Totals};
use crate::types::{PaymentMethod, Product, Service, TaxRate};

/// One product in the cart with its quantity.
///
/// The product is a frozen copy taken when it was first added, so the
/// line keeps its price even if the catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProductLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartProductLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        CartProductLine { product, quantity }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// An in-progress transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer_name: String,
    pub customer_phone: String,
    services: Vec<Service>,
    products: Vec<CartProductLine>,
    pub payment_method: PaymentMethod,
    tax_rate: TaxRate,
}

impl Transaction {
    /// Creates an empty transaction at the shop's tax rate.
    pub fn new() -> Self {
        Transaction::with_tax_rate(crate::SHOP_TAX_RATE)
    }

    /// Creates an empty transaction at a specific tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Transaction {
            customer_name: String::new(),
            customer_phone: String::new(),
            services: Vec::new(),
            products: Vec::new(),
            payment_method: PaymentMethod::default(),
            tax_rate,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Selects the service, or deselects it if it is already selected.
    ///
    /// Returns `true` when the service ends up selected.
    pub fn toggle_service(&mut self, service: &Service) -> bool {
        if let Some(pos) = self.services.iter().position(|s| s.id == service.id) {
            self.services.remove(pos);
            false
        } else {
            self.services.push(service.clone());
            true
        }
    }

    /// Adds one unit of the product, opening a new line if needed.
    ///
    /// Returns the line's quantity after the add. Quantities saturate at
    /// `u32::MAX`.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.products.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.products.push(CartProductLine::new(product.clone(), 1));
        1
    }

    /// Sets a line's quantity. Zero or below removes the line.
    ///
    /// A positive quantity for a product that has no line is ignored; the
    /// cart only adjusts lines that `add_product` created. Values above
    /// `u32::MAX` clamp.
    pub fn set_product_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.products.retain(|l| l.product.id != product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.products.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Records who the customer is. Both values are optional on a receipt.
    pub fn set_customer(&mut self, name: impl Into<String>, phone: impl Into<String>) {
        self.customer_name = name.into();
        self.customer_phone = phone.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Resets to an empty transaction, keeping the tax rate.
    pub fn clear(&mut self) {
        *self = Transaction::with_tax_rate(self.tax_rate);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Selected services in selection order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Product lines in the order they were added.
    pub fn product_lines(&self) -> &[CartProductLine] {
        &self.products
    }

    pub fn is_service_selected(&self, service_id: &str) -> bool {
        self.services.iter().any(|s| s.id == service_id)
    }

    /// Quantity of the product in the cart, 0 if it has no line.
    pub fn product_quantity(&self, product_id: &str) -> u32 {
        self.products
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// No services and no product lines. Checkout is blocked while true.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.products.is_empty()
    }

    /// Prices the current contents.
    pub fn totals(&self) -> Totals {
        pricing::compute_totals(&self.services, &self.products, self.tax_rate)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
