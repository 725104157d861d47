//! Cart flow tests through the real router and session layer.
//!
//! Each test drives the storefront the way the browser does: HTMX form
//! posts with a session cookie carried between requests.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use silk_mist_storefront::{config::StorefrontConfig, routes, state::AppState};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
    };
    routes::app(AppState::new(config))
}

fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Extract the session cookie pair from a response.
fn session_cookie(response: &Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn hx_trigger(response: &Response<axum::body::Body>) -> String {
    response
        .headers()
        .get("HX-Trigger")
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default()
}

async fn body_text(response: Response<axum::body::Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const ADD_ROSE: &str = "product_id=rose-silk-mist&name=Rose+Silk+Hair+Mist&price=24.00";

#[tokio::test]
async fn add_persists_across_requests() {
    let app = test_app();

    let response = send(&app, form_post("/cart/add", ADD_ROSE, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(hx_trigger(&response).contains("cart-open"));
    let cookie = session_cookie(&response);
    let rows = body_text(response).await;
    assert!(rows.contains("Rose Silk Hair Mist"));
    assert!(rows.contains("$24.00"));

    // A later request with the same cookie sees the hydrated cart.
    let response = send(&app, get("/cart/count", Some(&cookie))).await;
    assert!(body_text(response).await.contains(">1</span>"));

    let response = send(&app, get("/cart/total", Some(&cookie))).await;
    assert!(body_text(response).await.contains("$24.00"));
}

#[tokio::test]
async fn repeated_add_increments_one_row() {
    let app = test_app();

    let response = send(&app, form_post("/cart/add", ADD_ROSE, None)).await;
    let cookie = session_cookie(&response);

    // Same id with a different posted price: quantity bumps, price stays.
    let tampered = "product_id=rose-silk-mist&name=Rose+Silk+Hair+Mist&price=999.00";
    let rows = body_text(send(&app, form_post("/cart/add", tampered, Some(&cookie))).await).await;

    assert_eq!(rows.matches("cart-item-price").count(), 1, "one row expected");
    assert!(rows.contains(">2</span>"), "quantity should be 2: {rows}");
    assert!(rows.contains("$24.00"));
    assert!(!rows.contains("$999.00"));

    let response = send(&app, get("/cart/count", Some(&cookie))).await;
    assert!(body_text(response).await.contains(">2</span>"));
}

#[tokio::test]
async fn decrement_to_zero_removes_row() {
    let app = test_app();

    let response = send(&app, form_post("/cart/add", ADD_ROSE, None)).await;
    let cookie = session_cookie(&response);

    let body = "product_id=rose-silk-mist&delta=-1";
    let rows = body_text(send(&app, form_post("/cart/update", body, Some(&cookie))).await).await;
    assert!(rows.contains("Your cart is empty"));

    // Further decrements on the gone row stay a no-op.
    let rows = body_text(send(&app, form_post("/cart/update", body, Some(&cookie))).await).await;
    assert!(rows.contains("Your cart is empty"));
}

#[tokio::test]
async fn remove_is_idempotent() {
    let app = test_app();

    let response = send(&app, form_post("/cart/add", ADD_ROSE, None)).await;
    let cookie = session_cookie(&response);

    let body = "product_id=rose-silk-mist";
    let first = body_text(send(&app, form_post("/cart/remove", body, Some(&cookie))).await).await;
    let second = body_text(send(&app, form_post("/cart/remove", body, Some(&cookie))).await).await;
    assert!(first.contains("Your cart is empty"));
    assert_eq!(first, second);
}

#[tokio::test]
async fn checkout_with_empty_cart_is_blocked() {
    let app = test_app();

    let response = send(&app, form_post("/cart/checkout", "", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hx_trigger(&response), "", "no state change expected");
    assert!(body_text(response).await.contains("Your cart is empty!"));
}

#[tokio::test]
async fn checkout_clears_cart() {
    let app = test_app();

    let response = send(&app, form_post("/cart/add", ADD_ROSE, None)).await;
    let cookie = session_cookie(&response);

    let response = send(&app, form_post("/cart/checkout", "", Some(&cookie))).await;
    let trigger = hx_trigger(&response);
    assert!(trigger.contains("cart-reset"));
    assert!(trigger.contains("cart-close"));
    assert!(body_text(response).await.contains("Thank you for your purchase!"));

    let rows = body_text(send(&app, get("/cart/items", Some(&cookie))).await).await;
    assert!(rows.contains("Your cart is empty"));
    let count = body_text(send(&app, get("/cart/count", Some(&cookie))).await).await;
    assert!(count.contains(">0</span>"));
}

#[tokio::test]
async fn malformed_add_is_rejected() {
    let app = test_app();

    let body = "product_id=rose-silk-mist&name=Rose&price=not-a-price";
    let response = send(&app, form_post("/cart/add", body, None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = "product_id=rose-silk-mist&name=Rose&price=-5.00";
    let response = send(&app, form_post("/cart/add", body, None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = "product_id=&name=Rose&price=5.00";
    let response = send(&app, form_post("/cart/add", body, None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn home_page_renders_catalog_and_empty_cart() {
    let app = test_app();

    let response = send(&app, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Rose Silk Hair Mist"));
    assert!(html.contains("Your cart is empty"));
}

#[tokio::test]
async fn home_page_includes_particle_background() {
    let app = test_app();

    let html = body_text(send(&app, get("/", None)).await).await;
    assert!(html.contains(r#"id="particle-canvas""#));
    assert!(html.contains("/static/js/particles.js"));
}
