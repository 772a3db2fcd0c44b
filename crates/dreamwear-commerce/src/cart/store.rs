//! The session's cart store.
//!
//! [`CartStore`] owns the cart and the applied coupon code. Display surfaces
//! subscribe to it and are called back after every operation with the
//! change and a borrowed snapshot of the cart.

use std::fmt;

use crate::cart::{Cart, CartItem, LineOptions, OrderSummary, PricingRules};
use crate::catalog::{Product, ProductSelection};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked after each store operation.
pub type Observer = Box<dyn FnMut(&CartChange, &Cart)>;

/// What an operation did to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartChange {
    /// A product was added; `quantity` is the line's new quantity.
    Added { product_id: ProductId, quantity: i64 },
    /// A removal was requested. `found` is false for a no-op.
    Removed { product_id: String, found: bool },
    /// A quantity was set. Zero or below removes the line.
    QuantityUpdated {
        product_id: String,
        quantity: i64,
        found: bool,
    },
    CouponApplied { code: String },
    /// An unknown code was entered and any applied coupon dropped.
    CouponRejected { code: String },
    CouponRemoved,
    Cleared,
}

/// Cart state plus its observers.
pub struct CartStore {
    cart: Cart,
    coupon: Option<String>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty store in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            coupon: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register an observer. It is called synchronously after every
    /// operation, including no-ops, but not after rejected input.
    pub fn subscribe(&mut self, observer: impl FnMut(&CartChange, &Cart) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() < len_before
    }

    /// Add `quantity` of `product`, optionally with a custom design.
    ///
    /// A non-positive quantity is rejected without touching the cart or
    /// notifying observers.
    pub fn add_to_cart(
        &mut self,
        product: Product,
        quantity: i64,
        custom_design: Option<String>,
    ) -> Result<i64, CommerceError> {
        self.add_line(product, quantity, LineOptions::design(custom_design))
    }

    /// Validate a product detail selection, then add it.
    pub fn add_selection(
        &mut self,
        product: Product,
        selection: &ProductSelection,
    ) -> Result<i64, CommerceError> {
        if let Err(err) = selection.validate(&product) {
            warn!(product_id = %product.id, error = %err, "Selection rejected");
            return Err(err);
        }
        let options = LineOptions {
            custom_design: selection.custom_design.clone(),
            size: selection.size,
            color: selection.color.clone(),
        };
        self.add_line(product, selection.quantity, options)
    }

    fn add_line(
        &mut self,
        product: Product,
        quantity: i64,
        options: LineOptions,
    ) -> Result<i64, CommerceError> {
        let product_id = product.id.clone();
        let quantity = match self.cart.add_item(product, quantity, options) {
            Ok(quantity) => quantity,
            Err(err) => {
                warn!(product_id = %product_id, quantity, error = %err, "Add to cart rejected");
                return Err(err);
            }
        };

        debug!(
            product_id = %product_id,
            quantity,
            lines = self.cart.line_count(),
            "Added to cart"
        );
        self.notify(CartChange::Added {
            product_id,
            quantity,
        });
        Ok(quantity)
    }

    /// Remove the line for `product_id`. An absent id is a no-op.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        let found = self.cart.remove_item(product_id);
        debug!(product_id, found, lines = self.cart.line_count(), "Removed from cart");
        self.notify(CartChange::Removed {
            product_id: product_id.to_string(),
            found,
        });
    }

    /// Set the quantity of a line; zero or below removes it. An absent id
    /// is a no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let found = self.cart.update_quantity(product_id, quantity);
        debug!(
            product_id,
            quantity,
            found,
            lines = self.cart.line_count(),
            "Updated cart quantity"
        );
        self.notify(CartChange::QuantityUpdated {
            product_id: product_id.to_string(),
            quantity,
            found,
        });
    }

    /// Empty the cart and drop the coupon.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.coupon = None;
        debug!("Cleared cart");
        self.notify(CartChange::Cleared);
    }

    /// Redeem `code` against `rules`.
    ///
    /// An unknown code drops any coupon already applied.
    pub fn apply_coupon(&mut self, code: &str, rules: &PricingRules) -> Result<(), CommerceError> {
        match rules.coupon(code) {
            Some(coupon) => {
                info!(code = %coupon.code, percent_off = %coupon.percent_off, "Coupon applied");
                self.coupon = Some(coupon.code.clone());
                self.notify(CartChange::CouponApplied {
                    code: coupon.code.clone(),
                });
                Ok(())
            }
            None => {
                warn!(code, "Unknown coupon code");
                self.coupon = None;
                self.notify(CartChange::CouponRejected {
                    code: code.to_string(),
                });
                Err(CommerceError::InvalidCouponCode(code.to_string()))
            }
        }
    }

    pub fn remove_coupon(&mut self) {
        self.coupon = None;
        debug!("Coupon removed");
        self.notify(CartChange::CouponRemoved);
    }

    /// The applied coupon code.
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon.as_deref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.cart.get_item(product_id)
    }

    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    pub fn item_count(&self) -> Result<i64, CommerceError> {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of price x quantity at full precision. Round only for display.
    pub fn cart_total(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// Order summary with the discount taken from the current subtotal.
    pub fn summary(&self, rules: &PricingRules) -> Result<OrderSummary, CommerceError> {
        let coupon = self.coupon.as_deref().and_then(|code| rules.coupon(code));
        OrderSummary::calculate(
            self.cart.subtotal()?,
            self.cart.line_count(),
            self.cart.item_count()?,
            coupon,
            rules,
        )
    }

    fn notify(&mut self, change: CartChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change, &self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("coupon", &self.coupon)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hoodie() -> Product {
        Product::new("1", "Cosmic Explorer Hoodie", Money::from_minor(5999, Currency::USD), "h.jpeg")
            .with_sizes([Size::M, Size::L])
            .with_colors(["Black"])
    }

    fn recorder(store: &mut CartStore) -> (SubscriptionId, Rc<RefCell<Vec<CartChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |change, _| sink.borrow_mut().push(change.clone()));
        (id, seen)
    }

    #[test]
    fn test_observer_sees_every_operation() {
        let mut store = CartStore::default();
        let (_, seen) = recorder(&mut store);

        store.add_to_cart(hoodie(), 2, None).unwrap();
        store.update_quantity("1", 5);
        store.remove_from_cart("9");
        store.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(
            seen[0],
            CartChange::Added {
                product_id: ProductId::new("1"),
                quantity: 2
            }
        );
        assert_eq!(
            seen[2],
            CartChange::Removed {
                product_id: "9".to_string(),
                found: false
            }
        );
        assert_eq!(seen[3], CartChange::Cleared);
    }

    #[test]
    fn test_observer_gets_current_snapshot() {
        let mut store = CartStore::default();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        store.subscribe(move |_, cart| sink.borrow_mut().push(cart.subtotal().unwrap().display()));

        store.add_to_cart(hoodie(), 2, None).unwrap();
        store.update_quantity("1", 1);

        assert_eq!(*totals.borrow(), vec!["$119.98", "$59.99"]);
    }

    #[test]
    fn test_rejected_add_does_not_notify() {
        let mut store = CartStore::default();
        let (_, seen) = recorder(&mut store);

        assert_eq!(
            store.add_to_cart(hoodie(), 0, None),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(store.is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::default();
        let (id, seen) = recorder(&mut store);

        store.add_to_cart(hoodie(), 1, None).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_to_cart(hoodie(), 1, None).unwrap();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(store.item_count(), Ok(2));
    }

    #[test]
    fn test_add_selection_validates() {
        let mut store = CartStore::default();
        let (_, seen) = recorder(&mut store);

        let incomplete = ProductSelection::new().with_size(Size::M);
        assert_eq!(
            store.add_selection(hoodie(), &incomplete),
            Err(CommerceError::IncompleteSelection("color"))
        );
        assert!(seen.borrow().is_empty());

        let selection = ProductSelection::new()
            .with_size(Size::L)
            .with_color("Black")
            .with_quantity(2)
            .with_design("https://designs.example/cat.png");
        store.add_selection(hoodie(), &selection).unwrap();

        let line = store.get("1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.size, Some(Size::L));
        assert_eq!(line.color.as_deref(), Some("Black"));
        assert_eq!(line.display_image(), "https://designs.example/cat.png");
    }

    #[test]
    fn test_coupon_follows_subtotal() {
        let rules = PricingRules::default();
        let mut store = CartStore::default();
        store.add_to_cart(hoodie(), 1, None).unwrap();
        store.apply_coupon("discount20", &rules).unwrap();

        let summary = store.summary(&rules).unwrap();
        assert_eq!(summary.discount.display(), "$12.00");

        store.update_quantity("1", 2);
        let summary = store.summary(&rules).unwrap();
        assert_eq!(summary.discount.display(), "$24.00");
        // 119.98 + 5.99 - 23.996
        assert_eq!(summary.total.display(), "$101.97");
    }

    #[test]
    fn test_summary_reports_item_count_overflow() {
        let mut store = CartStore::default();
        let mut tee = hoodie();
        tee.id = ProductId::new("2");

        store.add_to_cart(hoodie(), i64::MAX, None).unwrap();
        store.add_to_cart(tee, 1, None).unwrap();

        assert_eq!(store.item_count(), Err(CommerceError::Overflow));
        assert_eq!(
            store.summary(&PricingRules::default()).unwrap_err(),
            CommerceError::Overflow
        );
    }

    #[test]
    fn test_unknown_coupon_clears_applied() {
        let rules = PricingRules::default();
        let mut store = CartStore::default();
        let (_, seen) = recorder(&mut store);
        store.add_to_cart(hoodie(), 1, None).unwrap();
        store.apply_coupon("DISCOUNT20", &rules).unwrap();

        let err = store.apply_coupon("BOGUS", &rules).unwrap_err();
        assert_eq!(err, CommerceError::InvalidCouponCode("BOGUS".to_string()));
        assert!(store.coupon_code().is_none());
        assert!(store.summary(&rules).unwrap().discount.is_zero());
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_clear_drops_coupon() {
        let rules = PricingRules::default();
        let mut store = CartStore::default();
        store.add_to_cart(hoodie(), 1, None).unwrap();
        store.apply_coupon("DISCOUNT20", &rules).unwrap();

        store.clear();

        assert!(store.is_empty());
        assert!(store.coupon_code().is_none());
        let summary = store.summary(&rules).unwrap();
        assert!(summary.total.is_zero());
    }
}
