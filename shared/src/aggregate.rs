//! Forecast aggregation engine
//!
//! Turns policy-external production estimates into monthly buckets on a
//! fixed 30-day grid and rolls a monthly bundle up into seasonal totals.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

use crate::models::{
    classify_season, MonthProduction, MonthlyBundle, MonthlyForecast, Season, SeasonSummary,
    SeasonalBundle,
};

/// Width of one synthesized month bucket.
///
/// The month grid advances by a fixed 30 days rather than true calendar
/// months; downstream consumers depend on the labels this produces, so the
/// approximation must not be replaced with calendar arithmetic.
pub const MONTH_BUCKET_DAYS: i64 = 30;

/// Errors raised by the aggregation engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("forecast horizon must cover at least one month")]
    EmptyHorizon,

    #[error("expected {expected} production estimates, got {got}")]
    EstimateMismatch { expected: usize, got: usize },
}

/// Format a date as its year-month label, e.g. "2025-01".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// First day of the month containing `date`.
fn month_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day() as i64 - 1)
}

/// Date underlying the month bucket at `index` (0-based) for a forecast
/// anchored at the first day of `start_date`'s month.
pub fn bucket_date(start_date: NaiveDate, index: u32) -> NaiveDate {
    month_anchor(start_date) + Duration::days(MONTH_BUCKET_DAYS * index as i64)
}

/// Build a monthly production bundle over `months` buckets.
///
/// `estimates` supplies one production point-estimate per bucket; the engine
/// assigns month labels, season tags, and symmetric uncertainty bounds
/// (`production * (1 ± bound_fraction)`) and accumulates the total.
pub fn build_monthly_bundle(
    start_date: NaiveDate,
    months: u32,
    estimates: &[f64],
    bound_fraction: f64,
) -> Result<MonthlyBundle, AggregateError> {
    if months == 0 {
        return Err(AggregateError::EmptyHorizon);
    }
    if estimates.len() != months as usize {
        return Err(AggregateError::EstimateMismatch {
            expected: months as usize,
            got: estimates.len(),
        });
    }

    let mut forecasts = Vec::with_capacity(months as usize);
    let mut total_production = 0.0;

    for (index, &production) in estimates.iter().enumerate() {
        let month_date = bucket_date(start_date, index as u32);
        total_production += production;
        forecasts.push(MonthlyForecast {
            month: month_label(month_date),
            month_number: index as u32 + 1,
            production_forecast: production,
            lower_bound: production * (1.0 - bound_fraction),
            upper_bound: production * (1.0 + bound_fraction),
            season: classify_season(month_date.month()),
        });
    }

    let forecast_start_month = forecasts[0].month.clone();
    let forecast_end_month = forecasts[forecasts.len() - 1].month.clone();

    Ok(MonthlyBundle {
        forecast_type: "monthly_production".to_string(),
        forecast_period: format!("{months}_months"),
        forecast_start_month,
        forecast_end_month,
        total_months: months,
        total_production,
        forecasts,
    })
}

/// Partition a monthly bundle by season tag and sum production per season.
///
/// Seasons with no matching months yield no entry; months are kept in the
/// order they were encountered in the source bundle.
pub fn summarize_seasons(bundle: &MonthlyBundle) -> SeasonalBundle {
    let mut seasons: BTreeMap<Season, SeasonSummary> = BTreeMap::new();

    for forecast in &bundle.forecasts {
        let summary = seasons.entry(forecast.season).or_insert_with(|| SeasonSummary {
            months_count: 0,
            total_production: 0.0,
            months: Vec::new(),
        });
        summary.months_count += 1;
        summary.total_production += forecast.production_forecast;
        summary.months.push(MonthProduction {
            month: forecast.month.clone(),
            production: forecast.production_forecast,
        });
    }

    SeasonalBundle {
        forecast_type: "seasonal_production".to_string(),
        forecast_period: bundle.forecast_period.clone(),
        seasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_anchor_mid_month() {
        assert_eq!(month_anchor(date(2025, 1, 15)), date(2025, 1, 1));
    }

    #[test]
    fn test_month_anchor_first_day() {
        assert_eq!(month_anchor(date(2025, 6, 1)), date(2025, 6, 1));
    }

    #[test]
    fn test_bucket_dates_advance_thirty_days() {
        assert_eq!(bucket_date(date(2025, 1, 15), 0), date(2025, 1, 1));
        assert_eq!(bucket_date(date(2025, 1, 15), 1), date(2025, 1, 31));
        assert_eq!(bucket_date(date(2025, 1, 15), 2), date(2025, 3, 2));
    }

    #[test]
    fn test_empty_horizon_rejected() {
        let result = build_monthly_bundle(date(2025, 1, 1), 0, &[], 0.15);
        assert_eq!(result.unwrap_err(), AggregateError::EmptyHorizon);
    }

    #[test]
    fn test_estimate_count_mismatch_rejected() {
        let result = build_monthly_bundle(date(2025, 1, 1), 3, &[1.0, 2.0], 0.15);
        assert_eq!(
            result.unwrap_err(),
            AggregateError::EstimateMismatch { expected: 3, got: 2 }
        );
    }

    #[test]
    fn test_period_label_uses_real_horizon() {
        let bundle = build_monthly_bundle(date(2025, 1, 1), 6, &[1.0; 6], 0.15).unwrap();
        assert_eq!(bundle.forecast_period, "6_months");
        let bundle = build_monthly_bundle(date(2025, 1, 1), 12, &[1.0; 12], 0.15).unwrap();
        assert_eq!(bundle.forecast_period, "12_months");
    }

    #[test]
    fn test_empty_seasons_omitted() {
        // Aug-Nov grid only touches Other months
        let bundle = build_monthly_bundle(date(2025, 8, 1), 3, &[10.0, 20.0, 30.0], 0.15).unwrap();
        let seasonal = summarize_seasons(&bundle);
        assert!(!seasonal.seasons.contains_key(&Season::Maha));
        assert!(!seasonal.seasons.contains_key(&Season::Yala));
        assert_eq!(seasonal.season_total(Season::Maha), 0.0);
        assert_eq!(seasonal.seasons[&Season::Other].months_count, 3);
    }
}
