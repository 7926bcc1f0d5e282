//! Validation utilities for the Salt Crystallization Forecast Service

use chrono::Duration;

use crate::models::DailyRecord;

/// Maximum accepted daily forecast horizon
pub const MAX_FORECAST_DAYS: u32 = 365;

/// Validate a requested daily forecast horizon
pub fn validate_forecast_days(days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("Forecast length must be positive");
    }
    if days > MAX_FORECAST_DAYS {
        return Err("Forecast length exceeds one year");
    }
    Ok(())
}

/// Validate the ordering invariants of a daily forecast sequence
///
/// Day numbers must increase by exactly one starting at 1 and dates must
/// advance by exactly one calendar day per record. A violation indicates a
/// contract breach by the upstream predictor.
pub fn validate_daily_sequence(records: &[DailyRecord]) -> Result<(), &'static str> {
    for (index, record) in records.iter().enumerate() {
        if record.day_number != index as u32 + 1 {
            return Err("Day numbers must increase by one starting at 1");
        }
        if index > 0 {
            let previous = &records[index - 1];
            if record.date - previous.date != Duration::days(1) {
                return Err("Dates must advance by one calendar day per record");
            }
        }
    }
    Ok(())
}
