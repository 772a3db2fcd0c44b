//! Search module.
//!
//! Contains the catalog filters and the query that combines them with a
//! sort order.

mod filter;
mod query;

pub use filter::Filter;
pub use query::{CatalogQuery, SortOption};
