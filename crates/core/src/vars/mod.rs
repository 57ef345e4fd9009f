//! `${...}` reference substitution.
//!
//! Expands `${name}` and `${name:argument}` placeholders embedded in
//! configuration and path strings against a caller-supplied
//! [`VariableSource`]. Nested references resolve innermost-first, undefined
//! references either fail or survive verbatim depending on the caller's
//! policy, and unproductive resolution cycles are detected across passes.

pub mod engine;
pub mod error;
pub mod resolver;
pub mod source;
pub mod stack;

pub use engine::{perform_substitution, validate_variables};
pub use error::SubstitutionError;
pub use resolver::VariablesResolver;
pub use source::VariableSource;
pub use stack::{VariableReference, VariableStack};

/// Two-character marker opening a variable reference.
pub const VARIABLE_START: &str = "${";
/// Single-character marker closing a variable reference.
pub const VARIABLE_END: char = '}';
/// Separator between a reference name and its optional argument.
pub const VARIABLE_ARG: char = ':';

/// Substitution submodule identifier.
pub fn module_name() -> &'static str {
    "vars"
}
