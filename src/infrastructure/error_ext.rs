//! Error conversion helpers for console I/O
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::infrastructure::{InfraError, InfraResult};

/// Extension trait for converting `io::Result` to `InfraResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// console.write_line("hello").with_context("write output")?;
    /// ```
    fn with_context(self, action: &str) -> InfraResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> InfraResult<T> {
        self.map_err(|e| InfraError::io(action, e))
    }
}
