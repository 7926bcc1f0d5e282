//! Salt Crystallization Forecast Service - Backend Server
//!
//! Exposes a crystallization forecasting model over HTTP: daily process
//! parameters and weather, monthly production with uncertainty bands, and
//! seasonal rollups.

use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scf_backend::{predictor::PredictorState, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scf_backend=debug,scf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Salt Crystallization Forecast Service");
    tracing::info!("Environment: {}", config.environment);

    // Load the model once; a failure is remembered and answered per request
    let predictor = PredictorState::load(Path::new(&config.model.path));

    let port = config.server.port;
    let state = AppState::new(config, predictor);

    // Build application
    let app = scf_backend::create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
