//! Ordered, append-only animal collection

use crate::domain::entities::Animal;

/// Animals in insertion order. Entries are never edited or removed.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    animals: Vec<Animal>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn all(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
