//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::filters;
use crate::routes::cart::CartView;
use crate::session_cart;
use crate::state::AppState;

/// Product display data for the card grid.
///
/// `price_value` is the raw decimal string the add-to-cart form posts;
/// `price` is the formatted display string.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub price_value: String,
    pub blurb: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            price_value: product.price.amount().to_string(),
            blurb: product.blurb.clone(),
        }
    }
}

/// A customer review for the testimonial section.
#[derive(Clone)]
pub struct ReviewView {
    pub reviewer_name: String,
    pub content: String,
}

/// Static reviews for the homepage.
fn get_featured_reviews() -> Vec<ReviewView> {
    vec![
        ReviewView {
            reviewer_name: "Sarah M.".to_string(),
            content: "The Rose Silk mist is the only product that keeps my hair shiny all day \
                      without weighing it down. Obsessed!"
                .to_string(),
        },
        ReviewView {
            reviewer_name: "Jessica T.".to_string(),
            content: "I started with the Trio Set and now the Coconut Cloud mist lives in my bag. \
                      Zero frizz, even in summer."
                .to_string(),
        },
        ReviewView {
            reviewer_name: "Amanda K.".to_string(),
            content: "Lavender Veil before bed changed my mornings. Softer hair and it smells \
                      incredible."
                .to_string(),
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Product cards for the grid.
    pub products: Vec<ProductCardView>,
    /// Featured customer reviews.
    pub reviews: Vec<ReviewView>,
    /// Hydrated cart for the initial panel render.
    pub cart: CartView,
}

/// Display the home page.
///
/// The cart panel, badge, and total render server-side from the hydrated
/// session cart, so a reload shows the persisted state without a fetch.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = session_cart::load(&session).await;

    HomeTemplate {
        products: state.catalog().iter().map(ProductCardView::from).collect(),
        reviews: get_featured_reviews(),
        cart: CartView::from(&cart),
    }
}
