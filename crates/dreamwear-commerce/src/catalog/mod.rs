//! Product catalog module.
//!
//! Contains products, categories, the product selection form and the
//! hard-coded storefront catalog.

mod catalog;
mod category;
pub mod fixtures;
mod product;
mod selection;

pub use catalog::Catalog;
pub use category::Category;
pub use product::{Product, Size};
pub use selection::ProductSelection;
