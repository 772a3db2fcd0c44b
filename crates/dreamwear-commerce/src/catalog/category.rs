//! Category types for the catalog filter pills.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Categories are flat. "All Products" is not a category: it is the absence
/// of a category filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier (also the URL slug).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("tshirts", "T-Shirts");
        assert_eq!(cat.id.as_str(), "tshirts");
        assert_eq!(cat.name, "T-Shirts");
    }
}
