//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Absent cart lines are never an error: removing or updating an unknown
/// product id is a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quantity passed to an add was zero or negative.
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(i64),

    /// A product option was left unselected.
    #[error("Please select a {0}")]
    IncompleteSelection(&'static str),

    /// A selected option is not offered by the product.
    #[error("{product} is not available in {option} {value}")]
    UnavailableOption {
        product: String,
        option: &'static str,
        value: String,
    },

    /// Option value is not one the storefront knows (e.g., size "XXXL").
    #[error("Unknown {option}: {value}")]
    UnknownOption { option: &'static str, value: String },

    /// Coupon code not recognized.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Amount string could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}
