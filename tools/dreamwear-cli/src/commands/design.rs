//! Design generation.

use anyhow::{Context as _, Result};
use dreamwear_commerce::catalog::Catalog;
use dreamwear_design::{suggestions, DesignStudio};
use serde_json::json;

use super::DesignArgs;
use crate::context::Context;

/// Run the design command.
pub async fn run(args: DesignArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let product = match &args.product {
        Some(id) => Some(catalog.require(id)?),
        None => None,
    };

    let generator = ctx.config.design_generator();
    let mut studio = DesignStudio::new();

    let spinner = ctx.output.spinner("Creating your design...");
    let generated = studio.generate(&generator, &args.prompt).await;
    spinner.finish_and_clear();
    let image = generated.context("Design generation failed")?;

    let gallery = product.map(|p| studio.preview_gallery(p));

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "design": image,
            "gallery": gallery,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Design ready for \"{}\"", image.prompt));
    ctx.output.kv("image", &image.url);

    if let (Some(product), Some(gallery)) = (product, gallery) {
        ctx.output.header(&format!("{} preview", product.name));
        for image in &gallery {
            ctx.output.list_item(image);
        }
    }

    ctx.output.header("Prompt Ideas");
    for idea in suggestions() {
        ctx.output.list_item(idea);
    }

    Ok(())
}
