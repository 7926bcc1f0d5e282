//! Top-level prediction report models

use serde::{Deserialize, Serialize};

use crate::models::{DailyForecastBundle, MonthlyBundle, SeasonalBundle};

/// Overall forecast status tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    Success,
    Error,
}

/// Fixed performance metrics reported for the loaded model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub test_mae: f64,
    pub test_rmse: f64,
    pub test_r2_score: f64,
    pub test_accuracy: f64,
    pub validation_r2_score: f64,
    pub validation_accuracy: f64,
}

/// Static model metadata attached to every forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    /// Generation timestamp, "YYYY-MM-DD HH:MM:SS"
    pub forecast_generated: String,
    pub performance_metrics: PerformanceMetrics,
}

/// Derived totals surfaced alongside the full forecast
///
/// Only the two named seasons appear here; the Other total is computed
/// during aggregation but not part of this block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub daily_forecast_days: u32,
    pub monthly_6_total_production: f64,
    pub monthly_12_total_production: f64,
    pub maha_season_total: f64,
    pub yala_season_total: f64,
}

/// Complete multi-scale forecast handed to the transport layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub status: ForecastStatus,
    pub daily_parameters_forecast: DailyForecastBundle,
    pub monthly_production_6months: MonthlyBundle,
    pub monthly_production_12months: MonthlyBundle,
    pub seasonal_production: SeasonalBundle,
    pub model_info: ModelInfo,
    pub summary: ForecastSummary,
}
