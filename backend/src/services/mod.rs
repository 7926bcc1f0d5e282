//! Business logic services for the Salt Crystallization Forecast Service

pub mod prediction;

pub use prediction::PredictionService;
