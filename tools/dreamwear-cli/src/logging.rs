//! Tracing subscriber setup.

use anyhow::{Context as _, Result};
use tracing_subscriber::{
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::{LogConfig, LogFormat};

/// Install the global subscriber. Logs always go to stderr.
///
/// The filter comes from `RUST_LOG`, then `--verbose`, then `log.level`.
pub fn init(config: &LogConfig, verbose: bool, json: bool) -> Result<()> {
    let filter = build_env_filter(config, verbose);
    let format = if json { LogFormat::Json } else { config.format };

    match format {
        LogFormat::Human => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        ),
        LogFormat::Json => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_writer(std::io::stderr),
        ),
    }
}

fn build_env_filter(config: &LogConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.level.as_str() };
        EnvFilter::new(level)
    })
}

fn init_with_layer<L>(filter: EnvFilter, fmt_layer: L) -> Result<()>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")
}
