//! CLI configuration.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use dreamwear_commerce::cart::{Coupon, PricingRules};
use dreamwear_commerce::catalog::Catalog;
use dreamwear_commerce::money::{Currency, Money};
use dreamwear_design::{MockDesignGenerator, DEFAULT_IMAGE_URL};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DreamwearConfig {
    /// Currency and shipping.
    #[serde(default)]
    pub store: StoreConfig,

    /// Redeemable coupons.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<CouponConfig>,

    /// Design generator settings.
    #[serde(default)]
    pub design: DesignConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for DreamwearConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            coupons: default_coupons(),
            design: DesignConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl DreamwearConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .validate(&Catalog::demo())
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Check the settings against the catalog they will price.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let currency = self.store.currency;
        if let Some(priced_in) = catalog.currency() {
            if priced_in != currency {
                bail!(
                    "store.currency is {} but the catalog is priced in {}",
                    currency.code(),
                    priced_in.code()
                );
            }
        }
        if self.store.flat_shipping < Decimal::ZERO {
            bail!(
                "store.flat_shipping must not be negative (got {})",
                self.store.flat_shipping
            );
        }
        if let Some(threshold) = self.store.free_shipping_threshold {
            if threshold < Decimal::ZERO {
                bail!("store.free_shipping_threshold must not be negative (got {threshold})");
            }
        }
        Ok(())
    }

    /// Shipping and coupon rules for the order summary.
    pub fn pricing_rules(&self) -> PricingRules {
        let currency = self.store.currency;
        let mut rules = PricingRules::new(Money::new(self.store.flat_shipping, currency));
        if let Some(threshold) = self.store.free_shipping_threshold {
            rules = rules.with_free_shipping_over(Money::new(threshold, currency));
        }
        for coupon in &self.coupons {
            rules = rules.with_coupon(Coupon::new(&coupon.code, coupon.percent_off));
        }
        rules
    }

    /// The mock generator described by `[design]`.
    pub fn design_generator(&self) -> MockDesignGenerator {
        MockDesignGenerator::new(
            Duration::from_millis(self.design.latency_ms),
            &self.design.image_url,
        )
    }
}

/// Store-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency every product is priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Shipping charged on a non-empty cart.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: Decimal,

    /// Subtotal at which shipping becomes free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold: Option<Decimal>,
}

fn default_flat_shipping() -> Decimal {
    Decimal::new(599, 2)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            flat_shipping: default_flat_shipping(),
            free_shipping_threshold: None,
        }
    }
}

/// A coupon entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponConfig {
    pub code: String,
    pub percent_off: Decimal,
}

fn default_coupons() -> Vec<CouponConfig> {
    vec![CouponConfig {
        code: "DISCOUNT20".to_string(),
        percent_off: Decimal::from(20),
    }]
}

/// Design generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignConfig {
    /// Simulated generation time in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Image returned for every prompt.
    #[serde(default = "default_image_url")]
    pub image_url: String,
}

fn default_latency_ms() -> u64 {
    2000
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            image_url: default_image_url(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default dreamwear.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Dreamwear storefront configuration

[store]
currency = "USD"
flat_shipping = "5.99"
# Uncomment to ship free above a subtotal
# free_shipping_threshold = "100.00"

[[coupons]]
code = "DISCOUNT20"
percent_off = "20"

[design]
# Simulated generation time
latency_ms = 2000
image_url = "{image_url}"

[log]
# Overridden by RUST_LOG and --verbose
level = "info"
# "human" or "json"
format = "human"
"#,
        image_url = DEFAULT_IMAGE_URL
    )
}
