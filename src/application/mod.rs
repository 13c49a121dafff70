//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic.

pub mod error;
pub mod report;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use report::AnimalReport;
