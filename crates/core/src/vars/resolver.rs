//! Convenience facade bundling a set of bindings with the engine.

use std::collections::BTreeMap;

use super::engine::{perform_substitution, validate_variables};
use super::error::SubstitutionError;
use super::source::VariableSource;

/// A named set of variable bindings that expands expressions against itself.
///
/// Paths recorded in stored reports routinely carry `${...}` references to
/// machine-specific roots. A resolver built from the current environment
/// rewrites such paths before they are matched against the workspace.
#[derive(Debug, Default, Clone)]
pub struct VariablesResolver {
    variables: BTreeMap<String, String>,
}

impl VariablesResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Expands every reference in `expression`, leaving unbound references
    /// in place.
    pub fn resolve(&self, expression: &str) -> Result<String, SubstitutionError> {
        perform_substitution(expression, false, true, &self.variables)
    }

    /// Checks that every reference in `expression` is bound, without
    /// substituting.
    pub fn validate(&self, expression: &str) -> Result<(), SubstitutionError> {
        validate_variables(expression, &self.variables)
    }
}

impl<K, V> FromIterator<(K, V)> for VariablesResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl VariableSource for VariablesResolver {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.variables.value_of(name)
    }
}
