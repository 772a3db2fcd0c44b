//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod design;
pub mod product;
pub mod profile;

use clap::{Args, Subcommand};
use dreamwear_commerce::catalog::Size;
use dreamwear_commerce::profile::ProfileTab;
use dreamwear_commerce::search::SortOption;
use rust_decimal::Decimal;

use cart::CartOp;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Case-insensitive text to find in product names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category id (hoodies, tshirts, sweatshirts, accessories).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order.
    #[arg(long, default_value = "featured")]
    pub sort: SortOption,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Offered color (repeatable).
    #[arg(long)]
    pub color: Vec<String>,

    /// Offered size (repeatable).
    #[arg(long)]
    pub size: Vec<Size>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:ID[:QTY], remove:ID, set:ID:QTY,
    /// design:ID:PROMPT.
    #[arg(required = true)]
    pub ops: Vec<CartOp>,

    /// Coupon code to apply after the operations.
    #[arg(long)]
    pub coupon: Option<String>,
}

/// Arguments for the design command.
#[derive(Args)]
pub struct DesignArgs {
    /// Text prompt.
    pub prompt: String,

    /// Show the design on this product's gallery.
    #[arg(short, long)]
    pub product: Option<String>,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Dashboard tab to show.
    #[arg(short, long, default_value = "designs")]
    pub tab: ProfileTab,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
