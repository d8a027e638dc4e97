//! Errors raised by native function payloads.

use thiserror::Error;

/// Failure produced when a native function payload is invoked.
///
/// A callable payload may refuse its arguments or signal an internal
/// failure; callers inspect the message only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallError {
    /// Human-readable failure description.
    pub message: String,
}

impl CallError {
    /// Create a new call error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        CallError {
            message: message.into(),
        }
    }
}
