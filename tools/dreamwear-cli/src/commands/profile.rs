//! Profile dashboard.

use anyhow::Result;
use chrono::Local;
use dreamwear_commerce::profile::{Profile, ProfileTab};
use serde_json::json;

use super::ProfileArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the profile command.
pub async fn run(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let profile = Profile::demo();

    if ctx.output.is_json() {
        let body = match args.tab {
            ProfileTab::Designs => json!(profile.designs),
            ProfileTab::Orders => json!(profile.orders),
            ProfileTab::Wishlist => json!(profile.wishlist.entries()),
            ProfileTab::Account => json!(profile.user),
        };
        ctx.output.json(&body);
        return Ok(());
    }

    ctx.output.header(&profile.user.name);
    ctx.output.info(&profile.user.member_since());

    ctx.output.header(args.tab.title());
    match args.tab {
        ProfileTab::Designs => {
            let today = Local::now().date_naive();
            for design in &profile.designs {
                ctx.output.list_item(&format!(
                    "{} ({})  {}",
                    design.name,
                    design.age_label(today),
                    design.image
                ));
            }
        }
        ProfileTab::Orders => {
            for order in &profile.orders {
                ctx.output.list_item(&format!(
                    "{}  {}  {}  {}",
                    order.id,
                    order.placed_on_label(),
                    status_badge(order.status),
                    order.total.display()
                ));
                for line in &order.items {
                    ctx.output.kv("      item", &line.name);
                }
            }
        }
        ProfileTab::Wishlist => {
            if profile.wishlist.is_empty() {
                ctx.output.info("Your wishlist is empty");
            }
            for entry in profile.wishlist.entries() {
                ctx.output.list_item(&format!(
                    "{} ({})  {}",
                    entry.name,
                    entry.product_id,
                    entry.price.display()
                ));
            }
        }
        ProfileTab::Account => {
            ctx.output.kv("name", &profile.user.name);
            ctx.output.kv("email", &profile.user.email);
            ctx.output.kv("joined", &profile.user.joined.to_string());
        }
    }

    Ok(())
}
