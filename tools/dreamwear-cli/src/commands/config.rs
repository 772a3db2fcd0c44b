//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("currency", config.store.currency.code());
    ctx.output.kv("flat_shipping", &config.store.flat_shipping.to_string());
    if let Some(threshold) = config.store.free_shipping_threshold {
        ctx.output.kv("free_shipping_threshold", &threshold.to_string());
    }

    for coupon in &config.coupons {
        ctx.output.info("");
        ctx.output.info("[[coupons]]");
        ctx.output.kv("code", &coupon.code);
        ctx.output.kv("percent_off", &coupon.percent_off.to_string());
    }

    ctx.output.info("");
    ctx.output.info("[design]");
    ctx.output.kv("latency_ms", &config.design.latency_ms.to_string());
    ctx.output.kv("image_url", &config.design.image_url);

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output.kv("level", &config.log.level);
    ctx.output.kv("format", &format!("{:?}", config.log.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
