//! Cart route handlers.
//!
//! Cart gestures arrive as HTMX form posts and are answered with rendered
//! fragments. Every mutation follows the same cycle: load the cart from the
//! session, apply one `CartStore` operation, save, and respond with a full
//! re-render of the row container. Count and total refresh themselves off
//! the `cart-updated` trigger, so no stale fragment survives a mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use silk_mist_core::{CartStore, Price, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::session_cart;

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::ZERO.display(),
            item_count: 0,
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price.display(),
                    line_price: item.unit_price.line_total(item.quantity).display(),
                })
                .collect(),
            subtotal: cart.total().display(),
            item_count: cart.count(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data (id, name, and price come from the product card).
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub name: String,
    pub price: String,
}

/// Quantity change form data from a cart row.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub delta: i32,
}

/// Remove form data from a cart row.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

// =============================================================================
// Fragment templates
// =============================================================================

/// Cart rows fragment (replaces the whole row container).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart: CartView,
}

/// Cart total fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_total.html")]
pub struct CartTotalTemplate {
    pub cart: CartView,
}

/// Checkout notice fragment (blocking notice or confirmation).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_notice.html")]
pub struct CartNoticeTemplate {
    pub message: String,
    pub success: bool,
}

// =============================================================================
// Fragment reads
// =============================================================================

/// Cart rows fragment (HTMX).
#[instrument(skip(session))]
pub async fn items(session: Session) -> impl IntoResponse {
    let cart = session_cart::load(&session).await;
    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = session_cart::load(&session).await;
    CartCountTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart total fragment (HTMX).
#[instrument(skip(session))]
pub async fn total(session: Session) -> impl IntoResponse {
    let cart = session_cart::load(&session).await;
    CartTotalTemplate {
        cart: CartView::from(&cart),
    }
}

// =============================================================================
// Mutations
// =============================================================================

/// Add one unit of a product to the cart (HTMX).
///
/// Re-renders the rows and triggers `cart-updated` (badge and total
/// refresh) plus `cart-open` (the panel slides out). If the id is already
/// in the cart its quantity increments and the posted name and price are
/// ignored: the first-seen price stays.
#[instrument(skip(session), fields(product_id = %form.product_id))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let product_id = form.product_id.trim();
    if product_id.is_empty() {
        return Err(AppError::BadRequest("missing product id".to_string()));
    }

    let price = form
        .price
        .trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::BadRequest(format!("invalid price: {}", form.price)))?;
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest(format!("negative price: {price}")));
    }

    let mut cart = session_cart::load(&session).await;
    cart.add_item(ProductId::from(product_id), form.name, Price::new(price));
    session_cart::save(&session, &cart).await;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated, cart-open")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Change a cart row's quantity by the posted delta (HTMX).
///
/// A delta that drives the quantity to zero removes the row. Unknown ids
/// are a no-op, since the row may already be gone.
#[instrument(skip(session), fields(product_id = %form.product_id, delta = form.delta))]
pub async fn update(
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    if form.delta == 0 {
        return Err(AppError::BadRequest("delta must be nonzero".to_string()));
    }

    let mut cart = session_cart::load(&session).await;
    cart.change_quantity(&ProductId::from(form.product_id), form.delta);
    session_cart::save(&session, &cart).await;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a cart row (HTMX). Idempotent.
#[instrument(skip(session), fields(product_id = %form.product_id))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = session_cart::load(&session).await;
    cart.remove_item(&ProductId::from(form.product_id));
    session_cart::save(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Check out (HTMX).
///
/// An empty cart gets a blocking notice and no state change. Otherwise the
/// cart is cleared and persisted, and `cart-reset`/`cart-close` rebuild the
/// now-empty rows and close the panel.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Response {
    let mut cart = session_cart::load(&session).await;

    if cart.is_empty() {
        return CartNoticeTemplate {
            message: "Your cart is empty!".to_string(),
            success: false,
        }
        .into_response();
    }

    cart.clear();
    session_cart::save(&session, &cart).await;
    tracing::info!("Checkout completed, cart cleared");

    (
        AppendHeaders([("HX-Trigger", "cart-updated, cart-reset, cart-close")]),
        CartNoticeTemplate {
            message: "Thank you for your purchase!".to_string(),
            success: true,
        },
    )
        .into_response()
}
