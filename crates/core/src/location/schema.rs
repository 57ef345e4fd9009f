// Wire vocabulary of the location-table documents.
// Both schema generations share the element and attribute names below.

/// Container element wrapping all entries.
pub const ELEMENT_LOCATIONS: &str = "Locations";

/// Per-entry element.
pub const ELEMENT_LOCATION: &str = "Loc";

/// Raw location string (legacy entry key).
pub const ATTR_LOCATION: &str = "loc";

/// Reference id (current entry key).
pub const ATTR_LOCATION_REF: &str = "locRef";

/// Cross-repository reference, remapped through a caller-supplied table.
pub const ATTR_REPOSITORY_REF: &str = "repRef";

/// Resource URI for remote inputs.
pub const ATTR_URI: &str = "uri";

/// Project id.
pub const ATTR_PROJECT_ID: &str = "projId";

/// Project display name.
pub const ATTR_PROJECT_NAME: &str = "projName";

/// Workspace-relative project path.
pub const ATTR_PROJECT_PATH: &str = "projPath";

/// Path of the resource relative to its project.
pub const ATTR_PROJECT_RELATIVE_PATH: &str = "resProjPath";

/// Source-control path.
pub const ATTR_SOURCE_CONTROL_PATH: &str = "scPath";

/// Symbol list attached to symbol-based inputs.
pub const ATTR_SYMBOLS: &str = "symbols";

/// Absolute file-system path, stored as an opaque attribute.
pub const ATTR_FILE_SYSTEM_PATH: &str = "fsPath";
