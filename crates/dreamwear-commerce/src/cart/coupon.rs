//! Coupon codes.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A percent-off coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    /// Code typed at checkout. Compared case-insensitively.
    pub code: String,
    /// Percentage off the subtotal (0 - 100).
    pub percent_off: Decimal,
}

impl Coupon {
    pub fn new(code: impl Into<String>, percent_off: Decimal) -> Self {
        Self {
            code: code.into(),
            percent_off: percent_off.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        }
    }

    /// The storefront's only promotion: 20% off with `DISCOUNT20`.
    pub fn discount20() -> Self {
        Self::new("DISCOUNT20", Decimal::from(20))
    }

    /// Check whether `code` redeems this coupon.
    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Discount on `subtotal`, at full precision.
    pub fn discount_on(&self, subtotal: &Money) -> Money {
        subtotal.percentage(self.percent_off)
    }
}
