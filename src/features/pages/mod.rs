pub mod handlers;
pub mod schemas;

use axum::{Router, routing::get};

use crate::utilities::app_state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/home", get(handlers::get_home_handler))
        .route("/api/v1/about", get(handlers::get_about_handler))
        .route("/api/v1/services", get(handlers::get_services_handler))
        .route(
            "/api/v1/translations",
            get(handlers::get_translations_handler),
        )
        .route(
            "/api/v1/translations/{key}",
            get(handlers::get_translation_handler),
        )
        .route("/healthz", get(handlers::healthz_handler))
}
