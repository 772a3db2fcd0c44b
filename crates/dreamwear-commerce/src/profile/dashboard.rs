//! The profile dashboard and its demo data.

use std::fmt;
use std::str::FromStr;

use crate::catalog::fixtures;
use crate::error::CommerceError;
use crate::ids::{DesignId, OrderId};
use crate::money::{Currency, Money};
use crate::profile::{OrderLine, OrderRecord, OrderStatus, SavedDesign, UserProfile, Wishlist};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const PEXELS: &str = "https://images.pexels.com/photos";

/// Sidebar tabs. Sign-out is not a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Designs,
    Orders,
    Wishlist,
    Account,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Designs,
        ProfileTab::Orders,
        ProfileTab::Wishlist,
        ProfileTab::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileTab::Designs => "designs",
            ProfileTab::Orders => "orders",
            ProfileTab::Wishlist => "wishlist",
            ProfileTab::Account => "account",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProfileTab::Designs => "My Designs",
            ProfileTab::Orders => "Order History",
            ProfileTab::Wishlist => "My Wishlist",
            ProfileTab::Account => "Account Details",
        }
    }
}

impl FromStr for ProfileTab {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        ProfileTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or(CommerceError::UnknownOption {
                option: "profile tab",
                value: s,
            })
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the profile page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub user: UserProfile,
    pub designs: Vec<SavedDesign>,
    /// Newest first.
    pub orders: Vec<OrderRecord>,
    pub wishlist: Wishlist,
}

impl Profile {
    /// The mock dashboard for Alex Johnson.
    pub fn demo() -> Self {
        let products = fixtures::products();
        let mut wishlist = Wishlist::new();
        for product in products.iter().filter(|p| matches!(p.id.as_str(), "5" | "6")) {
            wishlist.add(product);
        }

        Self {
            user: UserProfile {
                name: "Alex Johnson".to_string(),
                email: "alex@example.com".to_string(),
                joined: date(2025, 3, 1),
                avatar: photo(1851164),
            },
            designs: vec![
                saved("d1", "Cyberpunk Wolf", 1336873, date(2025, 5, 18)),
                saved("d2", "Neon Dreams", 1926769, date(2025, 5, 1)),
                saved("d3", "Space Traveller", 5698851, date(2025, 4, 1)),
            ],
            orders: vec![
                OrderRecord {
                    id: OrderId::new("ORD-1234"),
                    placed_on: date(2025, 5, 15),
                    status: OrderStatus::Delivered,
                    total: Money::from_minor(9498, Currency::USD),
                    items: vec![
                        line("Cosmic Explorer Hoodie", 6311392),
                        line("Neon Tiger T-Shirt", 1926769),
                    ],
                },
                OrderRecord {
                    id: OrderId::new("ORD-1122"),
                    placed_on: date(2025, 4, 30),
                    status: OrderStatus::Shipped,
                    total: Money::from_minor(6499, Currency::USD),
                    items: vec![line("Synthwave Dreams Hoodie", 5698851)],
                },
            ],
            wishlist,
        }
    }

    pub fn order(&self, id: &str) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| o.id.as_str() == id)
    }
}

fn photo(id: u32) -> String {
    format!("{PEXELS}/{id}/pexels-photo-{id}.jpeg")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn saved(id: &str, name: &str, photo_id: u32, created: NaiveDate) -> SavedDesign {
    SavedDesign {
        id: DesignId::new(id),
        name: name.to_string(),
        image: photo(photo_id),
        created,
    }
}

fn line(name: &str, photo_id: u32) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        image: photo(photo_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile() {
        let profile = Profile::demo();

        assert_eq!(profile.user.name, "Alex Johnson");
        assert_eq!(profile.user.member_since(), "Member since March 2025");
        assert_eq!(profile.designs.len(), 3);
        assert_eq!(profile.orders.len(), 2);

        let order = profile.order("ORD-1234").unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.total.display(), "$94.98");
        assert_eq!(order.items.len(), 2);

        let order = profile.order("ORD-1122").unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.total.display(), "$64.99");
    }

    #[test]
    fn test_demo_dates_are_real() {
        let profile = Profile::demo();
        let epoch = NaiveDate::default();

        assert_eq!(profile.user.joined, date(2025, 3, 1));
        assert!(profile.designs.iter().all(|d| d.created != epoch));
        assert!(profile.orders.iter().all(|o| o.placed_on != epoch));
    }

    #[test]
    fn test_demo_wishlist() {
        let profile = Profile::demo();
        let names: Vec<&str> = profile
            .wishlist
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Digital Forest T-Shirt", "Abstract Waves Hoodie"]);
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("Orders".parse::<ProfileTab>().unwrap(), ProfileTab::Orders);
        assert_eq!(ProfileTab::default(), ProfileTab::Designs);
        assert!("signout".parse::<ProfileTab>().is_err());
        assert_eq!(ProfileTab::Wishlist.title(), "My Wishlist");
    }
}
