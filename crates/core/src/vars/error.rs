//! Error types for variable reference substitution.

use thiserror::Error;

/// Errors surfaced while expanding `${...}` references.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("undefined variable reference '{name}'")]
    UndefinedReference { name: String },

    #[error("variable references form an unproductive cycle: {}", .variables.join(", "))]
    CircularReference { variables: Vec<String> },

    #[error("variable '{name}' holds a fixed value and does not accept an argument")]
    ArgumentOnFixedValue { name: String },
}
