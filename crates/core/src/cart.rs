//! The cart state machine.
//!
//! [`CartStore`] is the sole owner and mutator of cart state. It maintains
//! three invariants across every operation:
//!
//! 1. every present item has `quantity >= 1`; an operation that would drive
//!    a quantity to zero or below removes the item instead,
//! 2. no two items share a product id,
//! 3. an item's name and unit price are fixed by the first add of that id.
//!
//! Persistence and rendering read snapshots via [`CartStore::items`]; they
//! never hold a mutable handle.

use crate::types::{Price, ProductId};

/// One distinct product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Product identity. Unique within the cart.
    pub id: ProductId,
    /// Display name, fixed at first add.
    pub name: String,
    /// Unit price, fixed at first add.
    pub unit_price: Price,
    /// Always >= 1 while the item is present.
    pub quantity: u32,
}

/// Ordered cart state with a narrow mutation API.
///
/// Items keep insertion order, which is also display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted items, restoring the invariants.
    ///
    /// Zero-quantity entries are dropped. Duplicate ids are merged into the
    /// first occurrence: quantities are summed and the first-seen name and
    /// price win, consistent with the first-add-wins rule.
    #[must_use]
    pub fn hydrate(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.find_mut(&item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// If the id is already present its quantity is incremented and the
    /// passed name and price are ignored - the first-seen price stays,
    /// even if the caller's price differs. Otherwise a new item is appended
    /// with quantity 1. Always succeeds.
    pub fn add_item(&mut self, id: ProductId, name: impl Into<String>, unit_price: Price) {
        match self.find_mut(&id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                id,
                name: name.into(),
                unit_price,
                quantity: 1,
            }),
        }
    }

    /// Adjust a product's quantity by `delta`.
    ///
    /// Unknown ids are a no-op. A resulting quantity of zero or below
    /// removes the item entirely.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i32) {
        let Some(item) = self.find_mut(id) else {
            return;
        };
        let next = i64::from(item.quantity) + i64::from(delta);
        match u32::try_from(next) {
            Ok(quantity) if quantity > 0 => item.quantity = quantity,
            _ => self.items.retain(|item| item.id != *id),
        }
    }

    /// Remove a product from the cart. No-op if absent; idempotent.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id != *id);
    }

    /// Empty the cart (used after checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all items, as an exact decimal.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .map(|item| item.unit_price.line_total(item.quantity))
            .sum()
    }

    /// Sum of quantities over all items. Distinct from the row count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Read-only snapshot of the items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }
}
