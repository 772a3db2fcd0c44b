//! Product detail.

use anyhow::{bail, Result};
use dreamwear_commerce::catalog::Catalog;
use serde_json::json;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let Some(product) = catalog.get(&args.id) else {
        bail!("Product not found: {}", args.id);
    };
    let recommendations = catalog.recommendations(&args.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "recommendations": recommendations,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &product.price.display());
    if let Some(category) = product.category.as_ref().and_then(|id| catalog.category(id)) {
        ctx.output.kv("category", &category.name);
    }
    if let Some(material) = &product.material {
        ctx.output.kv("material", material);
    }
    if !product.sizes.is_empty() {
        let sizes: Vec<&str> = product.sizes.iter().map(|s| s.as_str()).collect();
        ctx.output.kv("sizes", &sizes.join(", "));
    }
    if !product.colors.is_empty() {
        ctx.output.kv("colors", &product.colors.join(", "));
    }
    if let Some(description) = &product.description {
        ctx.output.info("");
        ctx.output.info(description);
    }

    ctx.output.header("Gallery");
    for image in product.gallery() {
        ctx.output.list_item(image);
    }

    ctx.output.header("You May Also Like");
    for rec in recommendations {
        ctx.output
            .list_item(&format!("{} ({}) {}", rec.name, rec.id, rec.price.display()));
    }

    Ok(())
}
