//! Designs saved from the design studio.

use crate::ids::DesignId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedDesign {
    pub id: DesignId,
    pub name: String,
    /// Generated image URI.
    pub image: String,
    pub created: NaiveDate,
}

impl SavedDesign {
    /// Relative age shown under the thumbnail, e.g. "2 weeks ago".
    pub fn age_label(&self, today: NaiveDate) -> String {
        let days = (today - self.created).num_days().max(0);
        let (count, unit) = match days {
            0 => return "today".to_string(),
            1..=6 => (days, "day"),
            7..=29 => (days / 7, "week"),
            30..=364 => (days / 30, "month"),
            _ => (days / 365, "year"),
        };
        if count == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{count} {unit}s ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design(created: NaiveDate) -> SavedDesign {
        SavedDesign {
            id: DesignId::new("d1"),
            name: "Cyberpunk Wolf".to_string(),
            image: "wolf.jpeg".to_string(),
            created,
        }
    }

    #[test]
    fn test_age_label() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let ago = |days| design(today - chrono::Duration::days(days)).age_label(today);

        assert_eq!(ago(0), "today");
        assert_eq!(ago(1), "1 day ago");
        assert_eq!(ago(14), "2 weeks ago");
        assert_eq!(ago(31), "1 month ago");
        assert_eq!(ago(62), "2 months ago");
        assert_eq!(ago(800), "2 years ago");
        assert_eq!(ago(-3), "today");
    }
}
