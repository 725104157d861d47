//! Static product catalog.
//!
//! The catalog is storefront-owned static content: product pages render
//! from it, and add-to-cart buttons carry each product's id, name, and
//! price as form values. The cart itself only ever sees those values.

use rust_decimal::Decimal;
use silk_mist_core::{Price, ProductId};

/// A product offered on the storefront.
#[derive(Debug, Clone)]
pub struct Product {
    /// Stable catalog identifier (slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Short marketing copy for the product card.
    pub blurb: String,
}

impl Product {
    fn new(id: &str, name: &str, price_cents: i64, blurb: &str) -> Self {
        Self {
            id: ProductId::from(id),
            name: name.to_string(),
            price: Price::new(Decimal::new(price_cents, 2)),
            blurb: blurb.to_string(),
        }
    }
}

/// The full catalog, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "rose-silk-mist",
            "Rose Silk Hair Mist",
            2400,
            "Weightless rose water shine mist for daily touch-ups.",
        ),
        Product::new(
            "coconut-cloud-mist",
            "Coconut Cloud Hair Mist",
            2200,
            "Coconut milk proteins that smooth frizz without residue.",
        ),
        Product::new(
            "lavender-veil-mist",
            "Lavender Veil Hair Mist",
            2600,
            "Calming lavender overnight mist for softer mornings.",
        ),
        Product::new(
            "citrus-glow-mist",
            "Citrus Glow Hair Mist",
            2300,
            "Bergamot and sweet orange for brightness and bounce.",
        ),
        Product::new(
            "silk-trio-set",
            "Silk Trio Gift Set",
            5900,
            "Rose, coconut, and lavender minis in a travel pouch.",
        ),
    ]
}
