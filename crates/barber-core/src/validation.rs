//! # Validation Module
//!
//! Input checks applied by the register before it touches the transaction.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command decoding (serde)                                     │
//! │  ├── Unknown command / wrong JSON types → BAD_REQUEST                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Customer name / phone shape                                       │
//! │  ├── Quantity ceiling                                                  │
//! │  └── Config values (tax rate, print origin)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Transaction                                                  │
//! │  └── Structural rules (unique lines, qty ≤ 0 removes)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barber_core::validation::{validate_customer_name, validate_quantity};
//!
//! assert_eq!(validate_customer_name("  Ahmad Rizky ").unwrap(), "Ahmad Rizky");
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(1000).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CUSTOMER_NAME_LENGTH, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PHONE_LENGTH: usize = 20;
const MAX_ID_LENGTH: usize = 50;
const MAX_PAYMENT_METHOD_LENGTH: usize = 30;

// =============================================================================
// Customer
// =============================================================================

/// Validates a customer name and returns it trimmed.
///
/// An empty name is allowed; the receipt simply omits the customer line.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.chars().count() > MAX_CUSTOMER_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a customer phone number and returns it trimmed.
///
/// ## Rules
/// - May be empty
/// - Digits plus the usual separators: `+`, `-`, space, parentheses
/// - At most 20 characters
///
/// ## Example
/// ```rust
/// use barber_core::validation::validate_customer_phone;
///
/// assert!(validate_customer_phone("+62 812-3456-7890").is_ok());
/// assert!(validate_customer_phone("").is_ok());
/// assert!(validate_customer_phone("call me").is_err());
/// ```
pub fn validate_customer_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();

    if phone.len() > MAX_PHONE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "customer phone".to_string(),
            max: MAX_PHONE_LENGTH,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "customer phone".to_string(),
            reason: "must contain only digits, spaces, '+', '-' and parentheses".to_string(),
        });
    }

    Ok(phone.to_string())
}

// =============================================================================
// Cart Inputs
// =============================================================================

/// Validates a requested line quantity.
///
/// Only the ceiling is checked. Zero and negative values are legal input:
/// they remove the line.
///
/// ```text
/// Tap "+" on Premium Pomade (qty 999)
///      │
///      ▼
/// validate_quantity(1000) ── qty > 999? ──► OutOfRange, cart unchanged
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a catalog id (service or product) and returns it trimmed.
pub fn validate_catalog_id(field: &str, id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    Ok(id.to_string())
}

/// Validates a payment method name and returns it trimmed.
///
/// Any non-empty value is accepted; unknown methods print as given.
pub fn validate_payment_method(method: &str) -> ValidationResult<String> {
    let method = method.trim();

    if method.is_empty() {
        return Err(ValidationError::Required {
            field: "payment method".to_string(),
        });
    }

    if method.chars().count() > MAX_PAYMENT_METHOD_LENGTH {
        return Err(ValidationError::TooLong {
            field: "payment method".to_string(),
            max: MAX_PAYMENT_METHOD_LENGTH,
        });
    }

    Ok(method.to_string())
}

// =============================================================================
// Configuration Values
// =============================================================================

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates the origin the printer app calls back to.
///
/// Must be an `http://` or `https://` origin with a host.
///
/// ## Example
/// ```rust
/// use barber_core::validation::validate_print_origin;
///
/// assert!(validate_print_origin("http://localhost:3000").is_ok());
/// assert!(validate_print_origin("localhost:3000").is_err());
/// ```
pub fn validate_print_origin(origin: &str) -> ValidationResult<()> {
    let origin = origin.trim();

    if origin.is_empty() {
        return Err(ValidationError::Required {
            field: "print_origin".to_string(),
        });
    }

    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"));

    match host {
        Some(host) if !host.trim_end_matches('/').is_empty() && !host.contains(char::is_whitespace) => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "print_origin".to_string(),
            reason: "must be an http:// or https:// origin".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
