pub mod data;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod schemas;

use axum::{Router, routing::get};

use crate::utilities::app_state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/agents", get(handlers::get_many_agents_handler))
        .route(
            "/api/v1/agents/{agent_id}",
            get(handlers::get_one_agent_handler),
        )
}
