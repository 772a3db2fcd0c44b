//! Wishlist.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A saved product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for WishlistEntry {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Products saved for later, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `product`. Returns false if it was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(product.id.as_str()) {
            return false;
        }
        self.entries.push(WishlistEntry::from(product));
        true
    }

    /// Remove a product. Unknown ids are a no-op.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product_id.as_str() != product_id);
        self.entries.len() < len_before
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id.as_str() == product_id)
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
