//! Domain models for the Salt Crystallization Forecast Service

mod daily;
mod monthly;
mod report;
mod season;
mod seasonal;

pub use daily::*;
pub use monthly::*;
pub use report::*;
pub use season::*;
pub use seasonal::*;
