//! Shopping cart module.
//!
//! Contains the cart, its lines, the observable cart store, coupons and the
//! order summary.

mod cart;
mod coupon;
mod pricing;
mod store;

pub use cart::{Cart, CartItem, LineOptions};
pub use coupon::Coupon;
pub use pricing::{OrderSummary, PricingRules};
pub use store::{CartChange, CartStore, Observer, SubscriptionId};
