//! Hard-coded storefront catalog.

use crate::catalog::{Category, Product, Size};
use crate::money::{Currency, Money};

const PEXELS: &str = "https://images.pexels.com/photos";

fn photo(id: u32) -> String {
    format!("{PEXELS}/{id}/pexels-photo-{id}.jpeg")
}

fn usd(minor: i64) -> Money {
    Money::from_minor(minor, Currency::USD)
}

/// Category pills, in display order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("hoodies", "Hoodies"),
        Category::new("tshirts", "T-Shirts"),
        Category::new("sweatshirts", "Sweatshirts"),
        Category::new("accessories", "Accessories"),
    ]
}

/// Products in featured order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Cosmic Explorer Hoodie", usd(5999), photo(6311392))
            .with_category("hoodies")
            .with_description(
                "Stay warm with this premium hoodie featuring a stunning cosmic explorer design. \
                 This comfortable hoodie is perfect for everyday wear.",
            )
            .with_images([photo(6311392), photo(7679720), photo(7679723)])
            .with_sizes([Size::S, Size::M, Size::L, Size::XL, Size::XXL])
            .with_colors(["Black", "Navy", "Gray"])
            .with_material("80% cotton, 20% polyester"),
        Product::new("2", "Neon Tiger T-Shirt", usd(3499), photo(1926769))
            .with_category("tshirts")
            .with_description(
                "Make a statement with this vibrant Neon Tiger T-shirt. This eye-catching design \
                 is printed on a premium quality t-shirt for maximum comfort and durability.",
            )
            .with_images([photo(1926769), photo(2466756), photo(1833082)])
            .with_sizes([Size::XS, Size::S, Size::M, Size::L, Size::XL])
            .with_colors(["White", "Black", "Navy"])
            .with_material("100% organic cotton"),
        Product::new("3", "Synthwave Dreams Hoodie", usd(6499), photo(5698851))
            .with_category("hoodies")
            .with_description(
                "Embrace the retro-futuristic aesthetic with our Synthwave Dreams Hoodie. This \
                 premium hoodie features a stunning sunset grid design inspired by 80s retro \
                 aesthetics.",
            )
            .with_images([photo(5698851), photo(5698858), photo(5698849)])
            .with_sizes([Size::S, Size::M, Size::L, Size::XL])
            .with_colors(["Black", "Purple"])
            .with_material("70% cotton, 30% polyester"),
        Product::new("4", "Cyberpunk City Sweatshirt", usd(4999), photo(2529148))
            .with_category("sweatshirts")
            .with_sizes([Size::S, Size::M, Size::L, Size::XL])
            .with_colors(["Black", "Gray"])
            .with_material("80% cotton, 20% polyester"),
        Product::new("5", "Digital Forest T-Shirt", usd(3299), photo(1656684))
            .with_category("tshirts")
            .with_sizes([Size::XS, Size::S, Size::M, Size::L, Size::XL])
            .with_colors(["White", "Green"])
            .with_material("100% organic cotton"),
        Product::new("6", "Abstract Waves Hoodie", usd(5899), photo(7679725))
            .with_category("hoodies")
            .with_sizes([Size::S, Size::M, Size::L, Size::XL, Size::XXL])
            .with_colors(["Navy", "White"])
            .with_material("80% cotton, 20% polyester"),
        Product::new("7", "Circuit Board Sweatshirt", usd(5499), photo(1124589))
            .with_category("sweatshirts")
            .with_sizes([Size::M, Size::L, Size::XL])
            .with_colors(["Black", "Green"])
            .with_material("70% cotton, 30% polyester"),
        Product::new("8", "Glitch Art Hoodie", usd(6299), photo(2466756))
            .with_category("hoodies")
            .with_sizes([Size::S, Size::M, Size::L, Size::XL])
            .with_colors(["Black", "Purple", "White"])
            .with_material("80% cotton, 20% polyester"),
    ]
}
