//! Cart simulation: apply a sequence of operations to a fresh store.

use std::str::FromStr;

use anyhow::{Context as _, Result};
use dreamwear_commerce::cart::{CartStore, OrderSummary};
use dreamwear_commerce::catalog::Catalog;
use dreamwear_design::{DesignGenerator, DesignStudio};
use serde_json::json;
use tracing::debug;

use super::CartArgs;
use crate::context::Context;
use crate::output::{format_money, truncate};

/// One cart operation from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    /// `add:ID[:QTY]`, quantity defaults to 1.
    Add { id: String, quantity: i64 },
    /// `remove:ID`
    Remove { id: String },
    /// `set:ID:QTY`
    Set { id: String, quantity: i64 },
    /// `design:ID:PROMPT`
    Design { id: String, prompt: String },
}

impl FromStr for CartOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let verb = parts.next().unwrap_or_default();
        let id = parts
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| format!("missing product id in '{s}'"))?
            .to_string();
        let rest = parts.next();

        let quantity = |value: &str| {
            value
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity '{value}' in '{s}'"))
        };

        match (verb, rest) {
            ("add", None) => Ok(CartOp::Add { id, quantity: 1 }),
            ("add", Some(qty)) => Ok(CartOp::Add {
                id,
                quantity: quantity(qty)?,
            }),
            ("remove", None) => Ok(CartOp::Remove { id }),
            ("set", Some(qty)) => Ok(CartOp::Set {
                id,
                quantity: quantity(qty)?,
            }),
            ("design", Some(prompt)) => Ok(CartOp::Design {
                id,
                prompt: prompt.to_string(),
            }),
            _ => Err(format!(
                "unrecognized cart operation '{s}' (expected add:ID[:QTY], remove:ID, set:ID:QTY or design:ID:PROMPT)"
            )),
        }
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let rules = ctx.config.pricing_rules();
    let generator = ctx.config.design_generator();

    let mut store = CartStore::new(ctx.config.store.currency);
    store.subscribe(|change, cart| {
        debug!(
            ?change,
            lines = cart.line_count(),
            items = ?cart.item_count(),
            "Cart changed"
        );
    });

    for op in args.ops {
        apply(&mut store, &catalog, &generator, op, ctx).await?;
    }

    if let Some(code) = &args.coupon {
        if let Err(err) = store.apply_coupon(code, &rules) {
            ctx.output.warn(&err.to_string());
        }
    }

    let summary = store.summary(&rules).context("Failed to price the cart")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": store.items(),
            "summary": summary,
        }));
        return Ok(());
    }

    print_cart(ctx, &store, &summary);
    Ok(())
}

async fn apply(
    store: &mut CartStore,
    catalog: &Catalog,
    generator: &dyn DesignGenerator,
    op: CartOp,
    ctx: &Context,
) -> Result<()> {
    match op {
        CartOp::Add { id, quantity } => {
            let product = catalog.require(&id)?.clone();
            store
                .add_to_cart(product, quantity, None)
                .with_context(|| format!("Cannot add {id} to the cart"))?;
        }
        CartOp::Remove { id } => store.remove_from_cart(&id),
        CartOp::Set { id, quantity } => store.update_quantity(&id, quantity),
        CartOp::Design { id, prompt } => {
            let product = catalog.require(&id)?.clone();
            let mut studio = DesignStudio::new();

            let spinner = ctx.output.spinner(&format!("Creating your design: {prompt}"));
            let generated = studio.generate(generator, &prompt).await;
            spinner.finish_and_clear();
            generated.with_context(|| format!("Design for {id} failed"))?;

            let design = studio.accept()?;
            ctx.output
                .success(&format!("Design accepted for {}", product.name));
            store.add_to_cart(product, 1, Some(design.url))?;
        }
    }
    Ok(())
}

fn print_cart(ctx: &Context, store: &CartStore, summary: &OrderSummary) {
    ctx.output
        .header(&format!("Your Cart ({} items)", summary.item_count));

    if store.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        let widths = [4, 28, 5, 10, 10];
        ctx.output
            .table_row(&["ID", "NAME", "QTY", "PRICE", "TOTAL"], &widths);
        for item in store.items() {
            let name = truncate(&item.product.name, widths[1]);
            let quantity = item.quantity.to_string();
            let price = item.product.price.display();
            let total = item
                .line_total()
                .map(|m| m.display())
                .unwrap_or_else(|_| "overflow".to_string());
            ctx.output.table_row(
                &[item.id().as_str(), &name, &quantity, &price, &total],
                &widths,
            );
            if let Some(design) = &item.custom_design {
                ctx.output.kv("    design", design);
            }
        }
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("subtotal", &summary.subtotal.display());
    ctx.output.kv("shipping", &summary.shipping.display());
    if let Some(code) = &summary.coupon {
        ctx.output.kv(
            &format!("discount ({code})"),
            &format_money(&summary.discount, true),
        );
    }
    ctx.output.kv("total", &summary.total.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            "add:1".parse::<CartOp>().unwrap(),
            CartOp::Add {
                id: "1".to_string(),
                quantity: 1
            }
        );
        assert_eq!(
            "add:3:2".parse::<CartOp>().unwrap(),
            CartOp::Add {
                id: "3".to_string(),
                quantity: 2
            }
        );
    }

    #[test]
    fn test_parse_set_allows_zero_and_negative() {
        assert_eq!(
            "set:1:-1".parse::<CartOp>().unwrap(),
            CartOp::Set {
                id: "1".to_string(),
                quantity: -1
            }
        );
    }

    #[test]
    fn test_design_prompt_keeps_colons() {
        assert_eq!(
            "design:2:Neon samurai: night edition".parse::<CartOp>().unwrap(),
            CartOp::Design {
                id: "2".to_string(),
                prompt: "Neon samurai: night edition".to_string()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("add".parse::<CartOp>().is_err());
        assert!("add:1:two".parse::<CartOp>().is_err());
        assert!("set:1".parse::<CartOp>().is_err());
        assert!("remove:1:2".parse::<CartOp>().is_err());
        assert!("checkout:1".parse::<CartOp>().is_err());
    }
}
