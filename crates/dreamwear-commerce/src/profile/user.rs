//! Account details.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The signed-in shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Date the account was created.
    pub joined: NaiveDate,
    /// Avatar image URI.
    pub avatar: String,
}

impl UserProfile {
    /// "Member since March 2025".
    pub fn member_since(&self) -> String {
        format!("Member since {}", self.joined.format("%B %Y"))
    }
}
