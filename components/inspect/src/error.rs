//! Error taxonomy for classification and assertions.
//!
//! Exactly two failure kinds exist: a type error (failed assertions and the
//! deliberate boxed-primitive rejection in [`crate::detect`]) and an
//! argument error (structurally invalid combinator or range arguments).
//! Predicates themselves never fail; they return `false`.

use thiserror::Error;

/// A classification or assertion failure.
///
/// Callers should match on the variant, not the message text, although the
/// default message format is part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// A value failed an assertion, or a boxed primitive wrapper was
    /// handed to the classifier.
    #[error("TypeError: {0}")]
    Type(String),
    /// A combinator or range check received a structurally invalid
    /// argument.
    #[error("ArgumentError: {0}")]
    Argument(String),
}

impl InspectError {
    /// The carried message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            InspectError::Type(m) => m,
            InspectError::Argument(m) => m,
        }
    }
}

/// Result type for classification and assertion operations.
pub type InspectResult<T> = Result<T, InspectError>;
