//! Monthly production forecast models

use serde::{Deserialize, Serialize};

use crate::models::Season;

/// Production forecast for a single synthesized month
///
/// Invariant: `lower_bound <= production_forecast <= upper_bound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    /// Year-month label, e.g. "2025-01"
    pub month: String,
    /// 1-based index within the requested horizon
    pub month_number: u32,
    pub production_forecast: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub season: Season,
}

/// Monthly production forecasts over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBundle {
    pub forecast_type: String,
    /// Horizon label, e.g. "6_months" or "12_months"
    pub forecast_period: String,
    pub forecast_start_month: String,
    pub forecast_end_month: String,
    pub total_months: u32,
    pub total_production: f64,
    pub forecasts: Vec<MonthlyForecast>,
}
