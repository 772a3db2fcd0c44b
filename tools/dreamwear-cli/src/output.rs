//! Output formatting for the CLI.
//!
//! Human output goes to stdout; `--json` prints one JSON document on stdout
//! and suppresses everything else. Errors always go to stderr.

use std::time::Duration;

use console::style;
use dreamwear_commerce::money::Money;
use dreamwear_commerce::profile::OrderStatus;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.magenta} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored badge for an order status.
pub fn status_badge(status: OrderStatus) -> String {
    match status {
        OrderStatus::Delivered => style(status.as_str()).green().to_string(),
        OrderStatus::Shipped => style(status.as_str()).cyan().to_string(),
        OrderStatus::Processing => style(status.as_str()).yellow().to_string(),
    }
}

/// Money rendered for a table cell; discounts get a leading minus.
pub fn format_money(amount: &Money, negative: bool) -> String {
    if negative && !amount.is_zero() {
        format!("-{}", amount.display())
    } else {
        amount.display()
    }
}

/// Shorten `text` to `max` characters, ending in "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamwear_commerce::money::Currency;

    #[test]
    fn test_format_money() {
        let discount = Money::from_minor(2000, Currency::USD);
        assert_eq!(format_money(&discount, true), "-$20.00");
        assert_eq!(format_money(&discount, false), "$20.00");
        assert_eq!(format_money(&Money::zero(Currency::USD), true), "$0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Neon Tiger", 20), "Neon Tiger");
        assert_eq!(truncate("Cyberpunk City Sweatshirt", 12), "Cyberpunk...");
    }
}
