//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (products, testimonials, cart panel)
//! GET  /health            - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart/items        - Cart rows fragment
//! GET  /cart/count        - Cart count badge fragment
//! GET  /cart/total        - Cart total fragment
//! POST /cart/add          - Add to cart (rows fragment, triggers cart-updated + cart-open)
//! POST /cart/update       - Change quantity by delta (rows fragment, triggers cart-updated)
//! POST /cart/remove       - Remove item (rows fragment, triggers cart-updated)
//! POST /cart/checkout     - Checkout (notice fragment; clears cart when non-empty)
//!
//! # Forms (stateless)
//! POST /newsletter        - Newsletter subscription fragment
//! POST /contact           - Contact form fragment
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod newsletter;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/total", get(cart::total))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Stateless form handlers
        .route("/newsletter", post(newsletter::subscribe))
        .route("/contact", post(contact::submit))
}

/// Build the full application: routes, session layer, static assets.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
