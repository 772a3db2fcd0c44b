//! Product and size types.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Apparel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 6] = [Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl FromStr for Size {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownOption {
                option: "size",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog.
///
/// Products are read-only to the cart: the cart copies them into lines and
/// never writes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Representative image URI.
    pub image: String,
    /// Long description for the detail page.
    pub description: Option<String>,
    /// Gallery images; empty means only `image` is shown.
    pub images: Vec<String>,
    /// Sizes on offer.
    pub sizes: Vec<Size>,
    /// Colors on offer.
    pub colors: Vec<String>,
    /// Fabric composition.
    pub material: Option<String>,
    /// Category for catalog filtering.
    pub category: Option<CategoryId>,
}

impl Product {
    /// Create a product with only the fields the cart needs.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: None,
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            material: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Images for the detail page gallery.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Check if the product is offered in `size`.
    pub fn offers_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    /// Check if the product is offered in `color` (case-insensitive).
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.eq_ignore_ascii_case(color.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn hoodie() -> Product {
        Product::new(
            "1",
            "Cosmic Explorer Hoodie",
            Money::from_minor(5999, Currency::USD),
            "https://example.com/hoodie.jpeg",
        )
    }

    #[test]
    fn test_product_creation() {
        let product = hoodie().with_category("hoodies");
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.price.display(), "$59.99");
        assert_eq!(product.category, Some(CategoryId::new("hoodies")));
    }

    #[test]
    fn test_gallery_falls_back_to_image() {
        let product = hoodie();
        assert_eq!(product.gallery(), vec!["https://example.com/hoodie.jpeg"]);

        let product = product.with_images(["a.jpeg", "b.jpeg"]);
        assert_eq!(product.gallery(), vec!["a.jpeg", "b.jpeg"]);
    }

    #[test]
    fn test_offered_options() {
        let product = hoodie()
            .with_sizes([Size::S, Size::M])
            .with_colors(["Black", "Navy"]);

        assert!(product.offers_size(Size::M));
        assert!(!product.offers_size(Size::XXL));
        assert!(product.offers_color("navy"));
        assert!(!product.offers_color("Purple"));
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("xl".parse::<Size>().unwrap(), Size::XL);
        assert_eq!(" XXL ".parse::<Size>().unwrap(), Size::XXL);
        assert!("huge".parse::<Size>().is_err());
    }
}
