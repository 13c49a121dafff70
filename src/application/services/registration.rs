//! Registration and query service
//!
//! Turns raw user text into animals and renders the registry as reports.

use tracing::{debug, instrument};

use crate::application::report::AnimalReport;
use crate::domain::{Animal, AnimalKind, RegistrationError, Registry};

/// Owns the registry; the presentation layer goes through this service only.
#[derive(Debug, Default)]
pub struct RegistrationService {
    registry: Registry,
}

impl RegistrationService {
    /// Create a service with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw `(name, age, kind)` triple and append the animal.
    ///
    /// The name is taken verbatim. Age is checked before kind. On error the
    /// registry is untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn register(
        &mut self,
        raw_name: &str,
        raw_age: &str,
        raw_kind: &str,
    ) -> Result<Animal, RegistrationError> {
        let age = raw_age
            .parse::<i32>()
            .map_err(|source| RegistrationError::InvalidAge {
                input: raw_age.to_string(),
                source,
            })?;
        let kind: AnimalKind = raw_kind.parse()?;

        let animal = Animal::new(raw_name, age, kind);
        self.registry.add(animal.clone());
        debug!("register: {} animals registered", self.registry.len());
        Ok(animal)
    }

    /// Reports for every registered animal, in registration order.
    pub fn describe_all(&self) -> Vec<AnimalReport> {
        self.registry.all().iter().map(AnimalReport::from).collect()
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
