//! Dreamwear CLI - the storefront core from the command line.
//!
//! Commands:
//! - `dreamwear catalog` - Browse and filter products
//! - `dreamwear product` - Show one product and recommendations
//! - `dreamwear cart` - Run cart operations and print the order summary
//! - `dreamwear design` - Generate a design from a prompt
//! - `dreamwear profile` - Show the profile dashboard
//! - `dreamwear config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, ConfigArgs, DesignArgs, ProductArgs, ProfileArgs};

/// Dreamwear CLI - Browse, design and fill a cart of AI-designed apparel
#[derive(Parser)]
#[command(name = "dreamwear")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with optional filters and sort
    Catalog(CatalogArgs),

    /// Show product details
    Product(ProductArgs),

    /// Apply cart operations to a fresh cart
    Cart(CartArgs),

    /// Generate a custom design
    Design(DesignArgs),

    /// Show the profile dashboard
    Profile(ProfileArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.log, cli.verbose, cli.json)?;
    tracing::debug!(config = ?ctx.config_path, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Design(args) => commands::design::run(args, &ctx).await,
        Commands::Profile(args) => commands::profile::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
