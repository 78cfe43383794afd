//! Error type for generation.
//!
//! Only structural problems — schema constructs the tool fundamentally
//! cannot interpret — surface as errors and abort a run. Authoring gaps
//! (missing property types, unimplemented formats, external references)
//! are diagnostics handled locally by the builders.

use std::fmt::Display;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Declared type has no builder
    #[error("unsupported schema type '{0}'")]
    UnsupportedType(String),

    /// Local reference is malformed or does not resolve
    #[error(transparent)]
    Reference(#[from] sample_core::ReferenceError),

    /// Composition alternative given inline instead of as a `$ref`
    #[error("'{0}' alternative without '$ref' is not supported")]
    InlineAlternative(&'static str),

    /// Composition node without a usable alternatives list
    #[error("'{0}' node has an empty or missing alternatives list")]
    MissingAlternatives(&'static str),

    /// Constraints describe an empty range
    #[error("invalid {kind} bounds: minimum {min} exceeds maximum {max}")]
    InvalidBounds {
        kind: &'static str,
        min: String,
        max: String,
    },
}

impl GenerateError {
    pub(crate) fn invalid_bounds(
        kind: &'static str,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        Self::InvalidBounds {
            kind,
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
