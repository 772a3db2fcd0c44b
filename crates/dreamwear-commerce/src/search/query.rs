//! Catalog query builder.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    /// Form value (e.g., `price-asc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::NameDesc => "Name: Z to A",
        }
    }

    /// Ordering between two products. `Featured` treats all as equal so a
    /// stable sort keeps catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceAsc => a.price.amount.cmp(&b.price.amount),
            SortOption::PriceDesc => b.price.amount.cmp(&a.price.amount),
            SortOption::NameAsc => compare_names(&a.name, &b.name),
            SortOption::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| CommerceError::UnknownOption {
                option: "sort",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogQuery {
    /// Text typed into the search box.
    pub query: Option<String>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create a query that matches the whole catalog in featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.filters.retain(|f| !matches!(f, Filter::Text(_)));
        if q.trim().is_empty() {
            self.query = None;
        } else {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Drop the text query and every filter; the sort is kept.
    pub fn clear_filters(&mut self) {
        self.query = None;
        self.filters.clear();
    }

    /// Check if any filter narrows the listing.
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Check whether `product` passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filter and sort `products`, keeping input order for ties.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}
