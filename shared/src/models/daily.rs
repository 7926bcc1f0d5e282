//! Daily forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Process parameters measured or predicted for a single day.
///
/// Field names on the wire match the historical sensor naming used by the
/// pond instrumentation (OR = outer reservoir, IR = inner reservoir).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    pub water_temperature: f64,
    pub lagoon: f64,
    #[serde(rename = "OR_brine_level")]
    pub or_brine_level: f64,
    #[serde(rename = "OR_bund_level")]
    pub or_bund_level: f64,
    #[serde(rename = "IR_brine_level")]
    pub ir_brine_level: f64,
    #[serde(rename = "IR_bound_level")]
    pub ir_bound_level: f64,
    #[serde(rename = "East_channel")]
    pub east_channel: f64,
    #[serde(rename = "West_channel")]
    pub west_channel: f64,
}

/// Predicted weather conditions for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature_mean: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub rain_sum: f64,
    pub wind_speed_max: f64,
    pub wind_gusts_max: f64,
    pub relative_humidity_mean: f64,
}

/// One day of predicted process parameters and weather
///
/// Invariant: within a forecast sequence, `day_number` increases by exactly
/// one starting at 1 and `date` advances by exactly one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub day_number: u32,
    pub parameters: ProcessParameters,
    pub weather: WeatherConditions,
}

/// Ordered daily forecast over the requested horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecastBundle {
    pub forecast_type: String,
    pub forecast_start_date: NaiveDate,
    pub forecast_end_date: NaiveDate,
    pub total_days: u32,
    pub forecasts: Vec<DailyRecord>,
}

impl DailyForecastBundle {
    /// Wrap a daily sequence starting at `start_date` spanning `total_days`.
    pub fn new(start_date: NaiveDate, total_days: u32, forecasts: Vec<DailyRecord>) -> Self {
        let end_offset = total_days.saturating_sub(1);
        Self {
            forecast_type: "daily_parameters".to_string(),
            forecast_start_date: start_date,
            forecast_end_date: start_date + chrono::Duration::days(end_offset as i64),
            total_days,
            forecasts,
        }
    }
}
