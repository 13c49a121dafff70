//! Service container for dependency injection
//!
//! Wires up the registration service with settings and a console.

use std::sync::Arc;

use crate::application::services::RegistrationService;
use crate::config::Settings;
use crate::infrastructure::traits::{Console, StdConsole};

/// Container holding the application service and its collaborators.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Terminal boundary
    pub console: Box<dyn Console>,

    /// Owns the animal registry for the lifetime of the process
    pub registration: RegistrationService,
}

impl ServiceContainer {
    /// Create a new service container with the real console.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Box::new(StdConsole))
    }

    /// Create a service container with a custom console (for testing).
    pub fn with_deps(settings: Settings, console: Box<dyn Console>) -> Self {
        Self {
            settings: Arc::new(settings),
            console,
            registration: RegistrationService::new(),
        }
    }
}
