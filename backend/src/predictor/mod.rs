//! Placeholder crystallization predictor
//!
//! Loads a serialized model artifact once at process start and generates
//! daily forecasts with an explicit carried-state step. All randomized
//! values are drawn through the pluggable [`estimator::Estimator`] seam.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use shared::{DailyRecord, ModelInfo, PerformanceMetrics, ProcessParameters};

use crate::predictor::estimator::Estimator;

pub mod estimator;

/// Serialized model artifact
///
/// Baseline parameters stand in for current readings when a request omits
/// them; noise scales drive the per-field carried-state perturbation.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub baseline_parameters: ProcessParameters,
    pub noise_scales: ProcessParameters,
    pub performance_metrics: PerformanceMetrics,
}

/// A loaded crystallization model
#[derive(Debug, Clone)]
pub struct ModelPredictor {
    artifact: ModelArtifact,
}

impl ModelPredictor {
    /// Load the model artifact from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading model artifact at {}", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("parsing model artifact at {}", path.display()))?;
        Ok(Self { artifact })
    }

    /// Build a predictor directly from an artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Default readings used when a request carries no current values
    pub fn baseline_parameters(&self) -> &ProcessParameters {
        &self.artifact.baseline_parameters
    }

    /// Static metadata reported with every forecast
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_type: self.artifact.model_type.clone(),
            forecast_generated: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            performance_metrics: self.artifact.performance_metrics.clone(),
        }
    }

    /// Generate the ordered daily forecast sequence.
    ///
    /// Day one starts from the supplied current readings; every following
    /// day perturbs the previous day's parameters, so predictions carry
    /// forward through the horizon.
    pub fn daily_forecast<E: Estimator>(
        &self,
        start_date: NaiveDate,
        forecast_days: u32,
        current_values: &ProcessParameters,
        estimator: &mut E,
    ) -> Vec<DailyRecord> {
        let mut parameters = current_values.clone();
        let mut forecasts = Vec::with_capacity(forecast_days as usize);

        for day in 0..forecast_days {
            parameters = self.step(&parameters, estimator);
            forecasts.push(DailyRecord {
                date: start_date + Duration::days(day as i64),
                day_number: day + 1,
                parameters: parameters.clone(),
                weather: estimator.weather(),
            });
        }

        forecasts
    }

    /// One carried-state step: previous parameters plus per-field noise
    fn step<E: Estimator>(
        &self,
        previous: &ProcessParameters,
        estimator: &mut E,
    ) -> ProcessParameters {
        let scales = &self.artifact.noise_scales;
        ProcessParameters {
            water_temperature: previous.water_temperature
                + estimator.parameter_noise(scales.water_temperature),
            lagoon: previous.lagoon + estimator.parameter_noise(scales.lagoon),
            or_brine_level: previous.or_brine_level
                + estimator.parameter_noise(scales.or_brine_level),
            or_bund_level: previous.or_bund_level
                + estimator.parameter_noise(scales.or_bund_level),
            ir_brine_level: previous.ir_brine_level
                + estimator.parameter_noise(scales.ir_brine_level),
            ir_bound_level: previous.ir_bound_level
                + estimator.parameter_noise(scales.ir_bound_level),
            east_channel: previous.east_channel + estimator.parameter_noise(scales.east_channel),
            west_channel: previous.west_channel + estimator.parameter_noise(scales.west_channel),
        }
    }
}

/// Model availability, fixed at process start
///
/// A load failure is remembered and answered on every request; there is no
/// reload path.
#[derive(Debug)]
pub enum PredictorState {
    Ready(ModelPredictor),
    Unavailable { reason: String },
}

impl PredictorState {
    /// Load the model, capturing a failure instead of aborting startup
    pub fn load(path: &Path) -> Self {
        match ModelPredictor::load(path) {
            Ok(predictor) => {
                tracing::info!("Model loaded successfully from {}", path.display());
                Self::Ready(predictor)
            }
            Err(err) => {
                tracing::error!("Error loading model: {:#}", err);
                Self::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
