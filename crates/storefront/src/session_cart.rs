//! Cart persistence in the browser session.
//!
//! The cart is mirrored into a single session key as a JSON array of
//! `{id, name, price, quantity}` records (prices as JSON numbers). The
//! mirror is best-effort in both directions: a write failure is logged and
//! swallowed so the in-memory cart keeps working for the request, and a
//! read that finds malformed data drops the unusable records rather than
//! failing the page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use silk_mist_core::{CartItem, CartStore, Price, ProductId};
use tower_sessions::Session;

/// Session key holding the persisted cart.
pub const CART_KEY: &str = "hairMistCart";

/// Persisted shape of one cart entry.
///
/// Kept separate from [`CartItem`] so the wire layout is owned here: prices
/// round-trip as JSON numbers, and schema checks stay at this boundary.
#[derive(Debug, Serialize, Deserialize)]
struct StoredItem {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    quantity: u32,
}

impl From<&CartItem> for StoredItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.unit_price.amount(),
            quantity: item.quantity,
        }
    }
}

impl From<StoredItem> for CartItem {
    fn from(stored: StoredItem) -> Self {
        Self {
            id: ProductId::from(stored.id),
            name: stored.name,
            unit_price: Price::new(stored.price),
            quantity: stored.quantity,
        }
    }
}

/// Load the cart from the session.
///
/// An absent key, unreadable session, or non-array value yields an empty
/// cart. Array entries that fail to decode (or decode with quantity 0) are
/// dropped individually; the rest hydrate normally. Never fails.
pub async fn load(session: &Session) -> CartStore {
    let value = match session.get::<serde_json::Value>(CART_KEY).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read cart from session: {e}");
            None
        }
    };

    let entries = match value {
        Some(serde_json::Value::Array(entries)) => entries,
        Some(other) => {
            tracing::warn!(
                "Persisted cart is not an array (found {}); starting empty",
                type_name(&other)
            );
            return CartStore::new();
        }
        None => return CartStore::new(),
    };

    let items = entries.into_iter().filter_map(|entry| {
        match serde_json::from_value::<StoredItem>(entry) {
            Ok(stored) if stored.quantity >= 1 => Some(CartItem::from(stored)),
            Ok(stored) => {
                tracing::warn!(id = %stored.id, "Dropping persisted cart entry with zero quantity");
                None
            }
            Err(e) => {
                tracing::warn!("Dropping malformed persisted cart entry: {e}");
                None
            }
        }
    });

    CartStore::hydrate(items)
}

/// Save the cart to the session.
///
/// A write failure (store unavailable, serialization) is logged, never
/// propagated: the cart stays usable in memory for the rest of the request.
pub async fn save(session: &Session, cart: &CartStore) {
    let stored: Vec<StoredItem> = cart.items().iter().map(StoredItem::from).collect();
    if let Err(e) = session.insert(CART_KEY, &stored).await {
        tracing::error!("Failed to persist cart to session: {e}");
    }
}

fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
