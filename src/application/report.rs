//! Per-animal behavior reports

use std::fmt;

use crate::domain::Animal;

/// Rendered behaviors of one registered animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalReport {
    pub name: String,
    pub age: i32,
    /// One line per capability, sound first
    pub behaviors: Vec<String>,
}

impl AnimalReport {
    /// `"<name>, Age: <age>"`
    pub fn header(&self) -> String {
        format!("{}, Age: {}", self.name, self.age)
    }

    /// Header followed by the behavior lines.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.header())
            .chain(self.behaviors.iter().cloned())
            .collect()
    }
}

impl From<&Animal> for AnimalReport {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            age: animal.age(),
            behaviors: animal.behaviors(),
        }
    }
}

/// Block form: header, behaviors, blank separator line.
impl fmt::Display for AnimalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}
