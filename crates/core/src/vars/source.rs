//! Variable lookup abstraction used by the substitution engine.

use std::collections::{BTreeMap, HashMap};

/// Source of fixed variable bindings consulted during substitution.
///
/// Accepts either a plain string map or a richer settings layer implementing
/// the trait directly. Bindings are fixed values; parameterized lookups are
/// not part of this contract.
pub trait VariableSource {
    fn value_of(&self, name: &str) -> Option<&str>;
}

impl VariableSource for HashMap<String, String> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|value| value.as_str())
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_lookup() {
        let mut variables = HashMap::new();
        variables.insert("HOME".to_string(), "/home/user".to_string());

        assert_eq!(variables.value_of("HOME"), Some("/home/user"));
        assert_eq!(variables.value_of("MISSING"), None);
    }

    #[test]
    fn btree_map_lookup() {
        let mut variables = BTreeMap::new();
        variables.insert("A".to_string(), "1".to_string());

        assert_eq!(variables.value_of("A"), Some("1"));
        assert_eq!(variables.value_of("B"), None);
    }
}
