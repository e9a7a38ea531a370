//! # Error Types
//!
//! Domain-specific error types for barber-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barber-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog lookups, quantity ceilings             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  barber-register errors (app)                                          │
//! │  ├── ConfigError      - Bad config file / environment values           │
//! │  └── ApiError         - What the command client sees (serialized)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty cart at checkout is NOT an error: the transition is simply
//! suppressed by the register.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Service id is not in the catalog.
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item quantity exceeds maximum allowed.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "+" on Premium Pomade (qty: 999)
    ///      │
    ///      ▼
    /// QuantityTooLarge { requested: 1000, max: 999 }
    ///      │
    ///      ▼
    /// Register answers VALIDATION_ERROR, cart unchanged
    /// ```
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., letters in a phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
