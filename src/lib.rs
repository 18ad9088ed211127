pub mod features;
pub mod services;
pub mod utilities;
pub mod widgets;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE},
    },
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::utilities::{app_state::AppState, errors::AppError};

pub fn app(state: AppState) -> Result<Router, AppError> {
    let origin = state
        .config
        .frontend_endpoint
        .parse::<HeaderValue>()
        .map_err(|e| AppError::InvalidValue(format!("FRONTEND_ENDPOINT, {e}")))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE]);

    Ok(Router::new()
        .merge(features::pages::routes())
        .merge(features::listings::routes())
        .merge(features::agents::routes())
        .merge(features::contact::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
