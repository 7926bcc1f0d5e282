//! Seasonal production rollup models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Season;

/// A month's contribution to a season total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthProduction {
    pub month: String,
    pub production: f64,
}

/// Aggregated production for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub months_count: u32,
    pub total_production: f64,
    /// Constituent months in the order they appeared in the source bundle
    pub months: Vec<MonthProduction>,
}

/// Seasonal rollup of a monthly bundle
///
/// Seasons with no matching months are omitted from the map; read totals
/// through [`SeasonalBundle::season_total`], which defaults to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalBundle {
    pub forecast_type: String,
    pub forecast_period: String,
    pub seasons: BTreeMap<Season, SeasonSummary>,
}

impl SeasonalBundle {
    /// Total production for a season, zero when the season has no months.
    pub fn season_total(&self, season: Season) -> f64 {
        self.seasons
            .get(&season)
            .map(|summary| summary.total_production)
            .unwrap_or(0.0)
    }
}
