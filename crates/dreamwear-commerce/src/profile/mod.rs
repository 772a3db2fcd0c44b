//! Profile dashboard module.
//!
//! Account details, saved designs, order history and the wishlist. All of
//! it is mock data; nothing is persisted.

mod dashboard;
mod design;
mod order;
mod user;
mod wishlist;

pub use dashboard::{Profile, ProfileTab};
pub use design::SavedDesign;
pub use order::{OrderLine, OrderRecord, OrderStatus};
pub use user::UserProfile;
pub use wishlist::{Wishlist, WishlistEntry};
