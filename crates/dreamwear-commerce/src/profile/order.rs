//! Past orders shown on the profile page.

use std::fmt;

use crate::ids::OrderId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfillment status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Check if the order has left the warehouse.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product thumbnail inside an order card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub image: String,
}

/// A completed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    /// Amount charged.
    pub total: Money,
    pub items: Vec<OrderLine>,
}

impl OrderRecord {
    /// "May 15, 2025".
    pub fn placed_on_label(&self) -> String {
        self.placed_on.format("%B %-d, %Y").to_string()
    }
}
