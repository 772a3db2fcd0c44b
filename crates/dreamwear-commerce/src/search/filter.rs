//! Catalog filter types.

use crate::catalog::{Product, Size};
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog filter. A product must match every filter in a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category.
    Category(CategoryId),
    /// Filter by inclusive price range. A bound in another currency than
    /// the product's price never matches.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Case-insensitive substring search in the product name.
    Text(String),
    /// Product offers any of these colors.
    Colors(Vec<String>),
    /// Product offers any of these sizes.
    Sizes(Vec<Size>),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(id) => product.category.as_ref() == Some(id),
            Filter::PriceRange { min, max } => {
                let price = &product.price;
                min.map_or(true, |min| {
                    min.currency == price.currency && price.amount >= min.amount
                }) && max.map_or(true, |max| {
                    max.currency == price.currency && price.amount <= max.amount
                })
            }
            Filter::Text(query) => {
                let query = query.trim().to_lowercase();
                query.is_empty() || product.name.to_lowercase().contains(&query)
            }
            Filter::Colors(colors) => {
                colors.is_empty() || colors.iter().any(|c| product.offers_color(c))
            }
            Filter::Sizes(sizes) => {
                sizes.is_empty() || sizes.iter().any(|s| product.offers_size(*s))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn tee() -> Product {
        Product::new(
            "2",
            "Neon Tiger T-Shirt",
            Money::from_minor(3499, Currency::USD),
            "tiger.jpeg",
        )
        .with_category("tshirts")
        .with_sizes([Size::XS, Size::S, Size::M])
        .with_colors(["White", "Black"])
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        assert!(Filter::text("TIGER").matches(&tee()));
        assert!(Filter::text("  ").matches(&tee()));
        assert!(!Filter::text("hoodie").matches(&tee()));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let usd = |minor| Some(Money::from_minor(minor, Currency::USD));

        assert!(Filter::price_range(usd(3499), usd(3499)).matches(&tee()));
        assert!(Filter::price_range(None, usd(4000)).matches(&tee()));
        assert!(!Filter::price_range(usd(3500), None).matches(&tee()));
    }

    #[test]
    fn test_price_range_in_other_currency_never_matches() {
        let eur = |minor| Some(Money::from_minor(minor, Currency::EUR));

        assert!(!Filter::price_range(eur(0), None).matches(&tee()));
        assert!(!Filter::price_range(None, eur(1_000_000)).matches(&tee()));
    }

    #[test]
    fn test_category_filter() {
        assert!(Filter::category("tshirts").matches(&tee()));
        assert!(!Filter::category("hoodies").matches(&tee()));
    }

    #[test]
    fn test_option_filters_match_any() {
        assert!(Filter::Colors(vec!["red".into(), "black".into()]).matches(&tee()));
        assert!(!Filter::Colors(vec!["red".into()]).matches(&tee()));
        assert!(Filter::Sizes(vec![Size::XXL, Size::M]).matches(&tee()));
        assert!(!Filter::Sizes(vec![Size::XL]).matches(&tee()));
    }
}
