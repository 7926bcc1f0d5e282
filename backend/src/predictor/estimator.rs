//! Pluggable estimators for the predictor's placeholder values

use rand::prelude::*;
use shared::WeatherConditions;

/// Source of the randomized values the predictor fills in
///
/// Production uses [`RandomEstimator`]; tests substitute [`FixedEstimator`]
/// for deterministic output.
pub trait Estimator {
    /// Per-field perturbation applied during a carried-state step
    fn parameter_noise(&mut self, scale: f64) -> f64;

    /// Weather values for one forecast day
    fn weather(&mut self) -> WeatherConditions;

    /// Production point-estimate for one synthesized month, in tonnes
    fn monthly_production(&mut self) -> f64;
}

/// Randomized estimator backed by a seedable RNG
pub struct RandomEstimator {
    rng: StdRng,
}

impl RandomEstimator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed variant, useful for reproducing a forecast
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for RandomEstimator {
    fn parameter_noise(&mut self, scale: f64) -> f64 {
        // gen_range panics on an empty range
        if scale <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-scale..scale)
    }

    fn weather(&mut self) -> WeatherConditions {
        WeatherConditions {
            temperature_mean: self.rng.gen_range(25.0..28.0),
            temperature_min: self.rng.gen_range(22.0..25.0),
            temperature_max: self.rng.gen_range(27.0..30.0),
            rain_sum: self.rng.gen_range(0.0..5.0),
            wind_speed_max: self.rng.gen_range(10.0..30.0),
            wind_gusts_max: self.rng.gen_range(20.0..50.0),
            relative_humidity_mean: self.rng.gen_range(70.0..90.0),
        }
    }

    fn monthly_production(&mut self) -> f64 {
        self.rng.gen_range(20_000.0..30_000.0)
    }
}

/// Fixed-value estimator for deterministic tests
pub struct FixedEstimator {
    pub noise: f64,
    pub weather: WeatherConditions,
    pub production: f64,
}

impl FixedEstimator {
    /// Stub returning zero noise, calm weather, and a fixed production value
    pub fn new(production: f64) -> Self {
        Self {
            noise: 0.0,
            weather: WeatherConditions {
                temperature_mean: 26.5,
                temperature_min: 24.0,
                temperature_max: 29.5,
                rain_sum: 0.0,
                wind_speed_max: 15.0,
                wind_gusts_max: 25.0,
                relative_humidity_mean: 80.0,
            },
            production,
        }
    }
}

impl Estimator for FixedEstimator {
    fn parameter_noise(&mut self, _scale: f64) -> f64 {
        self.noise
    }

    fn weather(&mut self) -> WeatherConditions {
        self.weather.clone()
    }

    fn monthly_production(&mut self) -> f64 {
        self.production
    }
}
