//! Shared types and forecast aggregation for the Salt Crystallization
//! Forecast Service
//!
//! This crate contains the wire-level data model, the season classifier,
//! and the monthly/seasonal aggregation engine used by the backend.

pub mod aggregate;
pub mod models;
pub mod validation;

pub use aggregate::*;
pub use models::*;
pub use validation::*;
