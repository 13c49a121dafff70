//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod registration;

pub use registration::RegistrationService;
