//! Order summary calculations.

use crate::cart::Coupon;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping and coupon rules for the order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    /// Charged once per non-empty cart.
    pub flat_shipping: Money,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Option<Money>,
    /// Redeemable coupons.
    pub coupons: Vec<Coupon>,
}

impl PricingRules {
    pub fn new(flat_shipping: Money) -> Self {
        Self {
            flat_shipping,
            free_shipping_threshold: None,
            coupons: Vec::new(),
        }
    }

    pub fn with_free_shipping_over(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = Some(threshold);
        self
    }

    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.coupons.push(coupon);
        self
    }

    /// Find the coupon redeemed by `code`.
    pub fn coupon(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.matches(code))
    }

    /// Shipping charged on `subtotal` for a cart with `line_count` lines.
    pub fn shipping_for(&self, subtotal: &Money, line_count: usize) -> Money {
        if line_count == 0 {
            return Money::zero(subtotal.currency);
        }
        match &self.free_shipping_threshold {
            Some(threshold) if subtotal.amount >= threshold.amount => Money::zero(subtotal.currency),
            _ => self.flat_shipping,
        }
    }

    pub fn currency(&self) -> Currency {
        self.flat_shipping.currency
    }
}

impl Default for PricingRules {
    /// $5.99 flat shipping and the `DISCOUNT20` coupon.
    fn default() -> Self {
        Self::new(Money::from_minor(599, Currency::USD)).with_coupon(Coupon::discount20())
    }
}

/// Pricing breakdown shown beside the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of price x quantity over all lines.
    pub subtotal: Money,
    pub shipping: Money,
    pub discount: Money,
    /// subtotal + shipping - discount
    pub total: Money,
    /// Applied coupon code, if any.
    pub coupon: Option<String>,
    /// Number of lines (header badge).
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: i64,
}

impl OrderSummary {
    /// Build the summary for a cart.
    ///
    /// The discount is taken from `subtotal` on every call, so it follows
    /// later changes to the cart.
    pub fn calculate(
        subtotal: Money,
        line_count: usize,
        item_count: i64,
        coupon: Option<&Coupon>,
        rules: &PricingRules,
    ) -> Result<Self, CommerceError> {
        let shipping = rules.shipping_for(&subtotal, line_count);
        let discount = coupon
            .map(|c| c.discount_on(&subtotal))
            .unwrap_or_else(|| Money::zero(subtotal.currency));
        let total = subtotal.try_add(&shipping)?.try_subtract(&discount)?;

        Ok(Self {
            subtotal,
            shipping,
            discount,
            total,
            coupon: coupon.map(|c| c.code.clone()),
            line_count,
            item_count,
        })
    }

    /// Check if a coupon reduced the total.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    pub fn has_free_shipping(&self) -> bool {
        self.line_count > 0 && self.shipping.is_zero()
    }
}
