//! Prediction orchestration service
//!
//! Runs the blocking predictor under a bounded worker pool and assembles
//! the multi-scale forecast report.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{
    build_monthly_bundle, summarize_seasons, validate_daily_sequence, validate_forecast_days,
    DailyForecastBundle, ForecastStatus, ForecastSummary, MonthlyBundle, PredictionReport,
    ProcessParameters, Season,
};
use tokio::sync::Semaphore;

use crate::error::{AppError, AppResult};
use crate::predictor::estimator::{Estimator, RandomEstimator};
use crate::predictor::{ModelPredictor, PredictorState};
use crate::AppState;

/// Horizons assembled into every report
const SHORT_HORIZON_MONTHS: u32 = 6;
const LONG_HORIZON_MONTHS: u32 = 12;

/// Inputs for one prediction run
#[derive(Debug, Clone)]
pub struct PredictionInput {
    pub start_date: NaiveDate,
    pub forecast_days: u32,
    /// Current sensor readings; model baselines are used when absent
    pub current_values: Option<ProcessParameters>,
}

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<PredictorState>,
    slots: Arc<Semaphore>,
    bound_fraction: f64,
}

impl PredictionService {
    /// Create a new PredictionService instance from application state
    pub fn new(state: &AppState) -> Self {
        Self {
            predictor: state.predictor.clone(),
            slots: state.prediction_slots.clone(),
            bound_fraction: state.config.forecast.bound_fraction,
        }
    }

    /// Run a prediction with the randomized production estimator.
    ///
    /// The predictor call is blocking and runs on a dedicated thread; the
    /// semaphore bounds how many run at once. A call is not cancellable
    /// once started and there is no timeout or retry.
    pub async fn predict(&self, input: PredictionInput) -> AppResult<PredictionReport> {
        validate_forecast_days(input.forecast_days).map_err(|msg| AppError::Validation {
            field: "forecast_days".to_string(),
            message: msg.to_string(),
        })?;

        // Answer a failed load without consuming a worker slot
        if let PredictorState::Unavailable { reason } = self.predictor.as_ref() {
            return Err(AppError::PredictorUnavailable(reason.clone()));
        }

        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AppError::Internal("Prediction worker pool is closed".to_string()))?;

        let predictor = self.predictor.clone();
        let bound_fraction = self.bound_fraction;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            match predictor.as_ref() {
                PredictorState::Ready(model) => {
                    let mut estimator = RandomEstimator::new();
                    run_prediction(model, &input, &mut estimator, bound_fraction)
                }
                PredictorState::Unavailable { reason } => {
                    Err(AppError::PredictorUnavailable(reason.clone()))
                }
            }
        })
        .await
        .map_err(|err| AppError::Internal(format!("Prediction task failed: {}", err)))?
    }
}

/// Assemble the complete report from one predictor pass.
///
/// Deterministic apart from the estimator; tests drive this directly with
/// a fixed-value stub.
pub fn run_prediction<E: Estimator>(
    model: &ModelPredictor,
    input: &PredictionInput,
    estimator: &mut E,
    bound_fraction: f64,
) -> AppResult<PredictionReport> {
    let current_values = input
        .current_values
        .clone()
        .unwrap_or_else(|| model.baseline_parameters().clone());

    let daily = model.daily_forecast(
        input.start_date,
        input.forecast_days,
        &current_values,
        estimator,
    );
    validate_daily_sequence(&daily)
        .map_err(|msg| AppError::AggregationInconsistency(msg.to_string()))?;
    let daily_bundle = DailyForecastBundle::new(input.start_date, input.forecast_days, daily);

    let monthly_6 = monthly_bundle(input.start_date, SHORT_HORIZON_MONTHS, estimator, bound_fraction)?;
    let monthly_12 = monthly_bundle(input.start_date, LONG_HORIZON_MONTHS, estimator, bound_fraction)?;
    let seasonal = summarize_seasons(&monthly_12);

    let summary = ForecastSummary {
        daily_forecast_days: input.forecast_days,
        monthly_6_total_production: monthly_6.total_production,
        monthly_12_total_production: monthly_12.total_production,
        maha_season_total: seasonal.season_total(Season::Maha),
        yala_season_total: seasonal.season_total(Season::Yala),
    };

    Ok(PredictionReport {
        status: ForecastStatus::Success,
        daily_parameters_forecast: daily_bundle,
        monthly_production_6months: monthly_6,
        monthly_production_12months: monthly_12,
        seasonal_production: seasonal,
        model_info: model.model_info(),
        summary,
    })
}

/// Draw one estimate per month and bucket them over the horizon
fn monthly_bundle<E: Estimator>(
    start_date: NaiveDate,
    months: u32,
    estimator: &mut E,
    bound_fraction: f64,
) -> AppResult<MonthlyBundle> {
    let estimates: Vec<f64> = (0..months).map(|_| estimator.monthly_production()).collect();
    build_monthly_bundle(start_date, months, &estimates, bound_fraction)
        .map_err(|err| AppError::AggregationInconsistency(err.to_string()))
}
