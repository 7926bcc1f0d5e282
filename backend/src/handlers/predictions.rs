//! HTTP handlers for prediction endpoints

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::{PredictionReport, ProcessParameters};

use crate::error::{AppError, AppResult};
use crate::services::prediction::{PredictionInput, PredictionService};
use crate::AppState;

/// Prediction request body
#[derive(Debug, Deserialize, Validate)]
pub struct PredictionRequest {
    /// First forecast day (YYYY-MM-DD)
    pub start_date: NaiveDate,

    /// Number of days to forecast
    #[validate(range(min = 1, max = 365))]
    pub forecast_days: u32,

    /// Current sensor readings; model baselines are used when absent
    pub current_values: Option<ProcessParameters>,
}

/// Generate a multi-scale forecast
pub async fn get_predictions(
    State(state): State<AppState>,
    Json(input): Json<PredictionRequest>,
) -> AppResult<Json<PredictionReport>> {
    input
        .validate()
        .map_err(|err| AppError::ValidationError(err.to_string()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        start_date = %input.start_date,
        forecast_days = input.forecast_days,
        "Received prediction request"
    );

    let service = PredictionService::new(&state);
    let report = service
        .predict(PredictionInput {
            start_date: input.start_date,
            forecast_days: input.forecast_days,
            current_values: input.current_values,
        })
        .await?;

    tracing::info!(%request_id, "Prediction completed successfully");
    Ok(Json(report))
}
