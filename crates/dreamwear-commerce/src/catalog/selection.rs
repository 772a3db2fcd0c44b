//! Option selection on the product detail page.

use crate::catalog::{Product, Size};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Size, color, quantity and design chosen before adding to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSelection {
    pub size: Option<Size>,
    pub color: Option<String>,
    /// Never below 1.
    pub quantity: i64,
    /// Accepted design from the design studio.
    pub custom_design: Option<String>,
}

impl Default for ProductSelection {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            quantity: 1,
            custom_design: None,
        }
    }
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_design(mut self, design: impl Into<String>) -> Self {
        self.custom_design = Some(design.into());
        self
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Check that a size and color are chosen and that `product` offers both.
    pub fn validate(&self, product: &Product) -> Result<(), CommerceError> {
        let size = self.size.ok_or(CommerceError::IncompleteSelection("size"))?;
        let color = self
            .color
            .as_deref()
            .ok_or(CommerceError::IncompleteSelection("color"))?;

        if !product.offers_size(size) {
            return Err(CommerceError::UnavailableOption {
                product: product.name.clone(),
                option: "size",
                value: size.to_string(),
            });
        }
        if !product.offers_color(color) {
            return Err(CommerceError::UnavailableOption {
                product: product.name.clone(),
                option: "color",
                value: color.to_string(),
            });
        }
        Ok(())
    }

    /// Whether "Add to Cart" should be enabled.
    pub fn is_complete(&self, product: &Product) -> bool {
        self.validate(product).is_ok()
    }
}
