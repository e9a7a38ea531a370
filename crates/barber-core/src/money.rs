//! # Money Module
//!
//! Provides the `Money` type for rupiah amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rupiah has no fractional subunit in day-to-day retail.                 │
//! │                                                                         │
//! │    Regular Haircut      75000                                           │
//! │    Premium Pomade x2   170000                                           │
//! │                                                                         │
//! │  Every amount is a whole number of rupiah held in an i64. Tax is the   │
//! │  only division in the system, and it rounds explicitly (see            │
//! │  `calculate_tax`). No floating point anywhere.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barber_core::money::{CurrencyStyle, Money};
//!
//! let price = Money::from_rupiah(85_000);
//! let line = price * 2;
//!
//! assert_eq!(line.rupiah(), 170_000);
//! assert_eq!(line.format(CurrencyStyle::Rupiah), "Rp 170.000");
//! assert_eq!(line.format(CurrencyStyle::Plain), "170000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A whole-rupiah amount.
///
/// ## Design Decisions
/// - **i64 (signed)**: Leaves room for refunds even though the register
///   never produces negative amounts today
/// - **Single field tuple struct**: Serializes as a bare JSON number
///
/// ## Where Money is Used
/// ```text
/// Service.price ─────────────────────┐
///                                     ├──► subtotal ──► tax ──► total
/// Product.price × line quantity ─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax on this amount, rounding half up.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  tax = (amount × bps + 5000) / 10000                                │
    /// │                                                                     │
    /// │  The +5000 is half of the 10000 divisor, so any remainder of       │
    /// │  exactly one half rounds up:                                        │
    /// │                                                                     │
    /// │     75000 × 10% = 7500    → 7500                                    │
    /// │        15 × 10% = 1.5     → 2                                       │
    /// │        14 × 10% = 1.4     → 1                                       │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    /// i128 keeps the intermediate product from overflowing. Callers only
    /// pass non-negative subtotals; a negative amount would round toward
    /// zero instead.
    ///
    /// ## Example
    /// ```rust
    /// use barber_core::money::Money;
    /// use barber_core::types::TaxRate;
    ///
    /// let tax = Money::from_rupiah(75_000).calculate_tax(TaxRate::from_bps(1000));
    /// assert_eq!(tax.rupiah(), 7_500);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_rupiah(tax as i64)
    }

    /// Formats the amount for a receipt or display.
    ///
    /// - `Rupiah`: `Rp 170.000` (dot thousands separator, no fraction digits)
    /// - `Plain`: `170000`
    pub fn format(&self, style: CurrencyStyle) -> String {
        match style {
            CurrencyStyle::Plain => self.0.to_string(),
            CurrencyStyle::Rupiah => {
                let sign = if self.0 < 0 { "-" } else { "" };
                format!("{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
            }
        }
    }
}

/// Inserts `.` between every group of three digits: 1250000 → 1.250.000.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

// =============================================================================
// Currency Style
// =============================================================================

/// How amounts are rendered into receipt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// Indonesian Rupiah: `Rp 75.000`.
    #[default]
    Rupiah,
    /// Bare integer: `75000`.
    Plain,
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the rupiah style.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(CurrencyStyle::Rupiah))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
