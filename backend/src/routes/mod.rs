//! Route definitions for the Salt Crystallization Forecast Service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Prediction routes
        .nest("/predictions", prediction_routes())
}

/// Prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::get_predictions))
}
