//! Catalog listing.

use anyhow::Result;
use dreamwear_commerce::catalog::{Catalog, Product};
use dreamwear_commerce::money::Money;
use dreamwear_commerce::search::{CatalogQuery, Filter};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let query = build_query(&args, ctx);
    let products = catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    if products.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }
    print_products(ctx, &catalog, &products);
    Ok(())
}

fn build_query(args: &CatalogArgs, ctx: &Context) -> CatalogQuery {
    let currency = ctx.config.store.currency;
    let mut query = CatalogQuery::new().with_sort(args.sort);

    if let Some(text) = &args.search {
        query = query.with_query(text.clone());
    }
    if let Some(category) = &args.category {
        query = query.with_filter(Filter::category(category.as_str()));
    }
    if args.min.is_some() || args.max.is_some() {
        query = query.with_filter(Filter::price_range(
            args.min.map(|m| Money::new(m, currency)),
            args.max.map(|m| Money::new(m, currency)),
        ));
    }
    if !args.color.is_empty() {
        query = query.with_filter(Filter::Colors(args.color.clone()));
    }
    if !args.size.is_empty() {
        query = query.with_filter(Filter::Sizes(args.size.clone()));
    }
    query
}

/// Print a product table.
pub fn print_products(ctx: &Context, catalog: &Catalog, products: &[&Product]) {
    let widths = [4, 28, 12, 10];
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &widths);
    for product in products {
        let category = product
            .category
            .as_ref()
            .and_then(|id| catalog.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or("-");
        let name = truncate(&product.name, widths[1]);
        let price = product.price.display();
        ctx.output
            .table_row(&[product.id.as_str(), &name, category, &price], &widths);
    }
}
