//! Salt Crystallization Forecast Service - Backend
//!
//! Serves multi-scale crystallization forecasts (daily process parameters
//! and weather, monthly and seasonal production) from a model loaded once
//! at startup.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Semaphore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod predictor;
pub mod routes;
pub mod services;

pub use config::Config;

use predictor::PredictorState;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PredictorState>,
    pub config: Arc<Config>,
    /// Bounds how many predictions run at once
    pub prediction_slots: Arc<Semaphore>,
}

impl AppState {
    /// Build state from configuration and a loaded (or failed) model
    pub fn new(config: Config, predictor: PredictorState) -> Self {
        let max_workers = config.model.max_workers.max(1);
        Self {
            predictor: Arc::new(predictor),
            prediction_slots: Arc::new(Semaphore::new(max_workers)),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Salt Crystallization Forecast Service API v1.0"
}

/// Liveness endpoint
async fn liveness() -> &'static str {
    "OK"
}
