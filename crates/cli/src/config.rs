use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Loads a flat name -> value YAML mapping, as used for repository mappings
/// and variable bindings.
pub fn load_mapping_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read mapping file: {}\nPlease check file permissions.",
            path.display()
        )
    })?;

    // Use serde_path_to_error for better field-level error reporting
    let deserializer = serde_yaml::Deserializer::from_str(&content);
    let mapping: BTreeMap<String, String> =
        serde_path_to_error::deserialize(deserializer).with_context(|| {
            format!(
                "Failed to parse YAML from: {}\n\
             Expected a flat name: value mapping.",
                path.display()
            )
        })?;

    Ok(mapping)
}
