//! Domain-level errors (no external dependencies)

use std::num::ParseIntError;
use thiserror::Error;

/// Reasons a raw `(name, age, kind)` triple is rejected.
///
/// Both are recoverable: the registry is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("invalid age: {input:?}")]
    InvalidAge {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid animal type: {0:?}")]
    InvalidKind(String),
}
