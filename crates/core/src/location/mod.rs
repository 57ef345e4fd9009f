//! Location resolution for stored findings reports.
//!
//! This module parses location-table documents (legacy and current schema)
//! into stored-attribute bags and classifies each bag into a concrete
//! testable input via attribute-presence rules and a path-decomposition
//! fallback.
//!
//! # Example
//!
//! ```ignore
//! use findref_core::location::{LocationReader, LocationsReader};
//!
//! let reader = LocationsReader::from_document(document)?;
//! let input = reader.resolve_input("ref1", false)?;
//! assert!(input.is_some());
//! ```
pub mod error;
pub mod factory;
pub mod input;
pub mod matcher;
pub mod parser;
pub mod reader;
pub mod resolved;
pub mod schema;
pub mod stored;

pub use error::{LocationResolutionError, LocationsParseError};
pub use factory::classify;
pub use input::{ProjectAttributes, TestableInput};
pub use matcher::{decompose_path, DefaultLocationMatcher, LocationMatcher};
pub use parser::{parse_legacy_locations, parse_locations};
pub use reader::{LegacyLocationsReader, LocationReader, LocationsReader};
pub use resolved::{ResolvedLocation, SourceRange};
pub use stored::StoredLocation;

/// Location submodule identifier.
pub fn module_name() -> &'static str {
    "location"
}
