//! Contact form route handlers.
//!
//! Stateless: submissions are validated, logged for follow-up, and
//! acknowledged with a fragment that replaces the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::routes::newsletter::is_valid_email;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Success fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "contact/submit_success.html")]
pub struct ContactSuccessTemplate {
    pub name: String,
}

/// Error fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "contact/submit_error.html")]
pub struct ContactErrorTemplate {
    pub message: String,
}

/// Submit the contact form (HTMX).
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    let email = form.email.trim().to_lowercase();
    let name = form.name.trim().to_string();

    if !is_valid_email(&email) {
        return ContactErrorTemplate {
            message: "Please enter a valid email address.".to_string(),
        }
        .into_response();
    }

    if name.is_empty() || form.message.trim().is_empty() {
        return ContactErrorTemplate {
            message: "Name and message are required.".to_string(),
        }
        .into_response();
    }

    tracing::info!(email = %email, name = %name, "Contact message received");
    ContactSuccessTemplate { name }.into_response()
}
