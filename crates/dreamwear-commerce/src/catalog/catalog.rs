//! The in-memory product catalog.

use crate::catalog::{fixtures, Category, Product};
use crate::error::CommerceError;
use crate::ids::CategoryId;
use crate::money::Currency;
use crate::search::CatalogQuery;

/// Read-only product source for every page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog; `products` are kept in featured order.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The hard-coded storefront catalog.
    pub fn demo() -> Self {
        Self::new(fixtures::products(), fixtures::categories())
    }

    /// All products in featured order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Currency the catalog is priced in, taken from the first product.
    /// `None` for an empty catalog.
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(|p| p.price.currency)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn require(&self, id: &str) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// The first `n` products, for the home page.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Every product other than `id`, in featured order.
    pub fn recommendations(&self, id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id.as_str() != id)
            .collect()
    }

    /// Filter and sort the catalog.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }
}
