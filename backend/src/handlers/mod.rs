//! HTTP handlers for the Salt Crystallization Forecast Service

pub mod health;
pub mod predictions;

pub use health::*;
pub use predictions::*;
