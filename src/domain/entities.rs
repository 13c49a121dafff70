//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use crate::domain::error::RegistrationError;

/// Closed set of animal kinds.
///
/// The kind is fixed when an animal is created and decides which
/// capabilities the animal exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Mammal,
    Bird,
    Reptile,
    Fish,
    Amphibian,
    Insect,
}

impl AnimalKind {
    /// All kinds in canonical (selection list) order.
    pub const ALL: [AnimalKind; 6] = [
        AnimalKind::Mammal,
        AnimalKind::Bird,
        AnimalKind::Reptile,
        AnimalKind::Fish,
        AnimalKind::Amphibian,
        AnimalKind::Insect,
    ];

    /// Display name, e.g. "Mammal".
    pub fn name(self) -> &'static str {
        match self {
            AnimalKind::Mammal => "Mammal",
            AnimalKind::Bird => "Bird",
            AnimalKind::Reptile => "Reptile",
            AnimalKind::Fish => "Fish",
            AnimalKind::Amphibian => "Amphibian",
            AnimalKind::Insect => "Insect",
        }
    }

    /// Capabilities of this kind, sound first.
    pub fn capabilities(self) -> &'static [Capability] {
        use Capability::*;
        match self {
            AnimalKind::Mammal => &[Sound, Run],
            AnimalKind::Bird => &[Sound, Fly],
            AnimalKind::Reptile => &[Sound, Bite],
            AnimalKind::Fish => &[Sound, Swim],
            AnimalKind::Amphibian => &[Sound, Swim, Jump],
            AnimalKind::Insect => &[Sound, Fly],
        }
    }

    fn sound_phrase(self) -> &'static str {
        match self {
            AnimalKind::Mammal => "makes a mammal sound.",
            AnimalKind::Bird => "makes a bird sound.",
            AnimalKind::Reptile => "makes a reptile sound.",
            AnimalKind::Fish => "makes a bubbling sound.",
            AnimalKind::Amphibian => "makes an amphibian sound.",
            AnimalKind::Insect => "makes an insect sound.",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimalKind {
    type Err = RegistrationError;

    /// Case-insensitive match against the six kind names.
    ///
    /// Input is not trimmed: `" bird"` is not a kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        AnimalKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| RegistrationError::InvalidKind(s.to_string()))
    }
}

/// Pure mapping from kind to its ordered capability list.
pub fn capabilities_for(kind: AnimalKind) -> &'static [Capability] {
    kind.capabilities()
}

/// A named behavior that renders to a fixed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Sound,
    Run,
    Fly,
    Bite,
    Swim,
    Jump,
}

impl Capability {
    /// Short tag, e.g. "swim".
    pub fn name(self) -> &'static str {
        match self {
            Capability::Sound => "sound",
            Capability::Run => "run",
            Capability::Fly => "fly",
            Capability::Bite => "bite",
            Capability::Swim => "swim",
            Capability::Jump => "jump",
        }
    }

    /// Phrase for this capability. Only `Sound` depends on the kind.
    pub fn phrase(self, kind: AnimalKind) -> &'static str {
        match self {
            Capability::Sound => kind.sound_phrase(),
            Capability::Run => "is running.",
            Capability::Fly => "is flying.",
            Capability::Bite => "is biting.",
            Capability::Swim => "is swimming.",
            Capability::Jump => "jumps out of the water.",
        }
    }
}

/// A registered animal. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    age: i32,
    kind: AnimalKind,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: i32, kind: AnimalKind) -> Self {
        Self {
            name: name.into(),
            age,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    /// Behavior lines for this animal, `"<name> <phrase>"` per capability.
    pub fn behaviors(&self) -> Vec<String> {
        capabilities_for(self.kind)
            .iter()
            .map(|cap| format!("{} {}", self.name, cap.phrase(self.kind)))
            .collect()
    }
}
