//! # Receipt
//!
//! Projects a finished transaction into the ordered line sequence that the
//! print bridge renders.
//!
//! ## Layout
//! ```text
//! ┌────────────────────────────────────┐
//! │          BARBERSHOP POS            │  bold, center, double-size
//! │    Jl. Contoh No. 123, Jakarta     │  center
//! │         Tel: 021-1234567           │  center
//! │ Date: 16/10/2026 Time: 14.05.09    │  center
//! │ Customer: Ahmad Rizky              │  left (only with a name)
//! │ --------------------------------   │  center
//! │ SERVICES                           │  bold
//! │ Regular Haircut                    │  left
//! │                          Rp 75.000 │  right
//! │ PRODUCTS                           │  bold (only with products)
//! │ Premium Pomade x2                  │  left
//! │                         Rp 170.000 │  right
//! │ --------------------------------   │  center
//! │               Subtotal: Rp 245.000 │  right
//! │               Tax (10%): Rp 24.500 │  right
//! │                  TOTAL: Rp 269.500 │  bold, right, large
//! │ Payment: cash                      │  left
//! │                                    │  center (spacer)
//! │     Thank you for your visit!      │  center
//! │         Please come again          │  center
//! └────────────────────────────────────┘
//! ```
//!
//! The sequence is the contract with the external printer app. Line order,
//! emphasis, alignment and format must not drift.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Transaction;
use crate::money::CurrencyStyle;
use crate::pricing::Totals;

/// Dashed rule between receipt sections (32 columns, one 58mm roll).
pub const SEPARATOR: &str = "--------------------------------";

const THANK_YOU: &str = "Thank you for your visit!";
const COME_AGAIN: &str = "Please come again";

// =============================================================================
// Line Record
// =============================================================================

/// Record type of a receipt line. The print bridge only knows text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Character size of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TextFormat {
    #[default]
    Normal,
    /// Double height.
    Large,
    /// Double height and width.
    DoubleSize,
}

/// One printable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    pub kind: LineKind,
    pub content: String,
    pub emphasis: bool,
    pub alignment: Alignment,
    pub format: TextFormat,
}

impl ReceiptLine {
    /// A plain, left-aligned, normal-size line.
    pub fn text(content: impl Into<String>) -> Self {
        ReceiptLine {
            kind: LineKind::Text,
            content: content.into(),
            emphasis: false,
            alignment: Alignment::Left,
            format: TextFormat::Normal,
        }
    }

    pub fn bold(mut self) -> Self {
        self.emphasis = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.alignment = Alignment::Right;
        self
    }

    pub fn sized(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }
}

// =============================================================================
// Shop Profile
// =============================================================================

/// Header block printed at the top of every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopProfile {
    pub name: String,
    pub address: String,
    /// Printed as-is, e.g. `Tel: 021-1234567`.
    pub phone: String,
}

impl Default for ShopProfile {
    fn default() -> Self {
        ShopProfile {
            name: "BARBERSHOP POS".to_string(),
            address: "Jl. Contoh No. 123, Jakarta".to_string(),
            phone: "Tel: 021-1234567".to_string(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// An issued receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[ts(as = "String")]
    pub transaction_id: Uuid,
    /// Local wall-clock time the receipt was generated.
    #[ts(as = "String")]
    pub issued_at: NaiveDateTime,
    pub totals: Totals,
    pub lines: Vec<ReceiptLine>,
}

/// Builds receipt lines for one shop.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder<'a> {
    shop: &'a ShopProfile,
    style: CurrencyStyle,
}

impl<'a> ReceiptBuilder<'a> {
    pub fn new(shop: &'a ShopProfile) -> Self {
        ReceiptBuilder {
            shop,
            style: CurrencyStyle::default(),
        }
    }

    pub fn currency_style(mut self, style: CurrencyStyle) -> Self {
        self.style = style;
        self
    }

    /// Issues a receipt with a fresh transaction id.
    ///
    /// `issued_at` is the moment of generation, not of cart creation; the
    /// caller passes the current local time.
    pub fn build(&self, tx: &Transaction, issued_at: NaiveDateTime) -> Receipt {
        Receipt {
            transaction_id: Uuid::new_v4(),
            issued_at,
            totals: tx.totals(),
            lines: self.lines(tx, issued_at),
        }
    }

    /// The printable line sequence for `tx`.
    pub fn lines(&self, tx: &Transaction, issued_at: NaiveDateTime) -> Vec<ReceiptLine> {
        let totals = tx.totals();
        let mut lines = Vec::new();

        // Header
        lines.push(
            ReceiptLine::text(&self.shop.name)
                .bold()
                .centered()
                .sized(TextFormat::DoubleSize),
        );
        lines.push(ReceiptLine::text(&self.shop.address).centered());
        lines.push(ReceiptLine::text(&self.shop.phone).centered());
        lines.push(ReceiptLine::text(timestamp(issued_at)).centered());

        if !tx.customer_name.is_empty() {
            lines.push(ReceiptLine::text(format!("Customer: {}", tx.customer_name)));
        }

        lines.push(ReceiptLine::text(SEPARATOR).centered());

        // Services
        lines.push(ReceiptLine::text("SERVICES").bold());
        if tx.services().is_empty() {
            lines.push(ReceiptLine::text("No services"));
        } else {
            for service in tx.services() {
                lines.push(ReceiptLine::text(&service.name));
                lines.push(ReceiptLine::text(service.price.format(self.style)).right());
            }
        }

        // Products
        if !tx.product_lines().is_empty() {
            lines.push(ReceiptLine::text("PRODUCTS").bold());
            for line in tx.product_lines() {
                lines.push(ReceiptLine::text(format!(
                    "{} x{}",
                    line.product.name, line.quantity
                )));
                lines.push(ReceiptLine::text(line.line_total().format(self.style)).right());
            }
        }

        lines.push(ReceiptLine::text(SEPARATOR).centered());

        // Totals
        lines.push(
            ReceiptLine::text(format!("Subtotal: {}", totals.subtotal.format(self.style))).right(),
        );
        lines.push(
            ReceiptLine::text(format!(
                "Tax ({}): {}",
                tx.tax_rate().percent_label(),
                totals.tax.format(self.style)
            ))
            .right(),
        );
        lines.push(
            ReceiptLine::text(format!("TOTAL: {}", totals.total.format(self.style)))
                .bold()
                .right()
                .sized(TextFormat::Large),
        );

        lines.push(ReceiptLine::text(format!("Payment: {}", tx.payment_method)));

        // Footer
        lines.push(ReceiptLine::text(" ").centered());
        lines.push(ReceiptLine::text(THANK_YOU).centered());
        lines.push(ReceiptLine::text(COME_AGAIN).centered());

        lines
    }
}

/// `Date: 16/10/2026 Time: 14.05.09` (Indonesian day/month order, dotted
/// time).
fn timestamp(at: NaiveDateTime) -> String {
    format!(
        "Date: {} Time: {}",
        at.format("%-d/%-m/%Y"),
        at.format("%H.%M.%S")
    )
}
