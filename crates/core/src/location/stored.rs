// Stored-attribute bag for one location-table entry.
// Parsers build the bag; readers keep it immutable afterwards.

use std::collections::BTreeMap;

use crate::location::schema;

/// Ordered string-keyed attributes of one parsed entry.
///
/// The documented keys have typed accessors below; any other attribute found
/// on an entry is kept and reachable through [`StoredLocation::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredLocation {
    attributes: BTreeMap<String, String>,
}

impl StoredLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Present attribute keys, in stored order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn location(&self) -> Option<&str> {
        self.get(schema::ATTR_LOCATION)
    }

    pub fn location_reference(&self) -> Option<&str> {
        self.get(schema::ATTR_LOCATION_REF)
    }

    pub fn repository_reference(&self) -> Option<&str> {
        self.get(schema::ATTR_REPOSITORY_REF)
    }

    pub fn uri(&self) -> Option<&str> {
        self.get(schema::ATTR_URI)
    }

    pub fn project_id(&self) -> Option<&str> {
        self.get(schema::ATTR_PROJECT_ID)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.get(schema::ATTR_PROJECT_NAME)
    }

    pub fn project_path(&self) -> Option<&str> {
        self.get(schema::ATTR_PROJECT_PATH)
    }

    pub fn project_relative_path(&self) -> Option<&str> {
        self.get(schema::ATTR_PROJECT_RELATIVE_PATH)
    }

    pub fn source_control_path(&self) -> Option<&str> {
        self.get(schema::ATTR_SOURCE_CONTROL_PATH)
    }

    pub fn symbols(&self) -> Option<&str> {
        self.get(schema::ATTR_SYMBOLS)
    }

    pub fn file_system_path(&self) -> Option<&str> {
        self.get(schema::ATTR_FILE_SYSTEM_PATH)
    }
}

impl From<BTreeMap<String, String>> for StoredLocation {
    fn from(attributes: BTreeMap<String, String>) -> Self {
        Self { attributes }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StoredLocation {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}
