//! Storefront domain types and the cart store for Dreamwear.
//!
//! Dreamwear sells AI-designed apparel. This crate holds everything the
//! storefront keeps in memory:
//!
//! - **Catalog**: Products, categories, the product detail selection
//! - **Search**: Catalog filters and sort options
//! - **Cart**: The observable cart store, coupons and the order summary
//! - **Profile**: Account, saved designs, orders and wishlist mock data
//!
//! # Example
//!
//! ```rust
//! use dreamwear_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let mut store = CartStore::new(Currency::USD);
//!
//! let hoodie = catalog.require("1")?.clone();
//! store.add_to_cart(hoodie, 2, None)?;
//!
//! assert_eq!(store.cart_total()?.display(), "$119.98");
//!
//! let rules = PricingRules::default();
//! store.apply_coupon("DISCOUNT20", &rules)?;
//! let summary = store.summary(&rules)?;
//! println!("Total: {}", summary.total.display());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod profile;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Common imports for storefront code.
pub mod prelude {
    pub use crate::cart::{
        Cart, CartChange, CartItem, CartStore, Coupon, LineOptions, OrderSummary, PricingRules,
        SubscriptionId,
    };
    pub use crate::catalog::{Catalog, Category, Product, ProductSelection, Size};
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, DesignId, OrderId, ProductId};
    pub use crate::money::{Currency, Money};
    pub use crate::profile::{Profile, ProfileTab};
    pub use crate::search::{CatalogQuery, Filter, SortOption};
}
