//! Cart and cart line types.

use crate::catalog::{Product, Size};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The items currently in the shopping cart, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order they were first added.
    pub items: Vec<CartItem>,
    /// Cart currency. Every product added must be priced in it.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// Lines are keyed by product id alone. Adding an id that is already in
    /// the cart accumulates the quantity on that line; any option supplied
    /// in `options` replaces the stored one. Returns the line's quantity
    /// after the add.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The product is priced in another currency
    /// - Arithmetic overflow would occur
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: i64,
        options: LineOptions,
    ) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            existing.quantity = new_quantity;
            existing.apply(options);
            return Ok(new_quantity);
        }

        let mut item = CartItem::new(product, quantity);
        item.apply(options);
        self.items.push(item);
        Ok(quantity)
    }

    /// Set the quantity of a line.
    ///
    /// If quantity is <= 0, removes the line. Returns whether a line was
    /// found.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| i.product.id.as_str() == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line from the cart. Returns whether one was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id.as_str() != product_id);
        self.items.len() < len_before
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    ///
    /// Returns error if the quantities overflow when added together.
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        self.items.iter().try_fold(0i64, |acc, item| {
            acc.checked_add(item.quantity).ok_or(CommerceError::Overflow)
        })
    }

    /// Get number of lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product id.
    pub fn get_item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id.as_str() == product_id)
    }

    /// Sum of price x quantity over all lines, unrounded.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, item| {
                acc.try_add(&item.line_total()?)
            })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// Optional per-line choices made when adding a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineOptions {
    /// Design image URI that replaces the product image.
    pub custom_design: Option<String>,
    pub size: Option<Size>,
    pub color: Option<String>,
}

impl LineOptions {
    /// Options carrying only a custom design.
    pub fn design(custom_design: Option<String>) -> Self {
        Self {
            custom_design,
            ..Self::default()
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product snapshot taken when the line was created.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: i64,
    pub custom_design: Option<String>,
    pub size: Option<Size>,
    pub color: Option<String>,
}

impl CartItem {
    fn new(product: Product, quantity: i64) -> Self {
        Self {
            product,
            quantity,
            custom_design: None,
            size: None,
            color: None,
        }
    }

    /// Last supplied value wins; `None` keeps what is stored.
    fn apply(&mut self, options: LineOptions) {
        if let Some(design) = options.custom_design {
            self.custom_design = Some(design);
        }
        if let Some(size) = options.size {
            self.size = Some(size);
        }
        if let Some(color) = options.color {
            self.color = Some(color);
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Image to show for this line: the custom design if any, else the
    /// product image.
    pub fn display_image(&self) -> &str {
        self.custom_design.as_deref().unwrap_or(&self.product.image)
    }

    /// Price x quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product.price.try_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, minor: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_minor(minor, Currency::USD), "p.jpeg")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.currency, Currency::USD);
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let qty = cart
            .add_item(product("1", 5999), 2, LineOptions::default())
            .unwrap();

        assert_eq!(qty, 2);
        assert_eq!(cart.item_count(), Ok(2));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal().unwrap().display(), "$119.98");
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 2, LineOptions::default())
            .unwrap();
        let qty = cart
            .add_item(product("1", 5999), 3, LineOptions::default())
            .unwrap();

        assert_eq!(qty, 5);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_invalid_quantity() {
        let mut cart = Cart::default();

        let result = cart.add_item(product("1", 5999), 0, LineOptions::default());
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));

        let result = cart.add_item(product("1", 5999), -5, LineOptions::default());
        assert_eq!(result, Err(CommerceError::InvalidQuantity(-5)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_other_currency_rejected() {
        let mut cart = Cart::default();
        let euro = Product::new("9", "Euro Tee", Money::from_minor(2000, Currency::EUR), "e.jpeg");

        let result = cart.add_item(euro, 1, LineOptions::default());
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 100), i64::MAX, LineOptions::default())
            .unwrap();

        let result = cart.add_item(product("1", 100), 1, LineOptions::default());
        assert_eq!(result, Err(CommerceError::Overflow));
        assert_eq!(cart.get_item("1").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_item_count_overflow_across_lines() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 100), i64::MAX, LineOptions::default())
            .unwrap();
        cart.add_item(product("2", 100), 1, LineOptions::default())
            .unwrap();

        assert_eq!(cart.item_count(), Err(CommerceError::Overflow));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_design_last_write_wins() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 1, LineOptions::design(Some("a.png".into())))
            .unwrap();
        cart.add_item(product("1", 5999), 1, LineOptions::default())
            .unwrap();
        assert_eq!(cart.get_item("1").unwrap().display_image(), "a.png");

        cart.add_item(product("1", 5999), 1, LineOptions::design(Some("b.png".into())))
            .unwrap();
        let item = cart.get_item("1").unwrap();
        assert_eq!(item.display_image(), "b.png");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_display_image_falls_back_to_product() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 1, LineOptions::default())
            .unwrap();
        assert_eq!(cart.get_item("1").unwrap().display_image(), "p.jpeg");
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 2, LineOptions::default())
            .unwrap();

        assert!(cart.update_quantity("1", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_and_remove_unknown_are_noops() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 2, LineOptions::default())
            .unwrap();

        assert!(!cart.update_quantity("9", 4));
        assert!(!cart.remove_item("9"));
        assert_eq!(cart.item_count(), Ok(2));
    }

    #[test]
    fn test_line_serializes_flat() {
        let mut cart = Cart::default();
        cart.add_item(product("1", 5999), 1, LineOptions::design(Some("d.png".into())))
            .unwrap();

        let json = serde_json::to_value(&cart.items[0]).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["custom_design"], "d.png");
    }
}
