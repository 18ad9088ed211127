pub mod handlers;
pub mod implementations;
pub mod schemas;

use axum::{Router, routing::post};

use crate::utilities::app_state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/contact", post(handlers::submit_contact_handler))
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
