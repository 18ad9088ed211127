pub mod data;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod schemas;

use axum::{Router, routing::get};

use crate::utilities::app_state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/properties",
            get(handlers::get_many_listings_handler),
        )
        .route(
            "/api/v1/properties/amenities",
            get(handlers::get_amenities_handler),
        )
        .route(
            "/api/v1/properties/code/{code}",
            get(handlers::get_listing_by_code_handler),
        )
        .route(
            "/api/v1/properties/{listing_id}",
            get(handlers::get_one_listing_handler),
        )
}
