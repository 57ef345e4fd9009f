// Error types for location-table parsing and stored-location classification.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Raised while consuming a location-table document. The first error aborts
/// the whole parse; there is no partial recovery.
#[derive(Debug, Error)]
pub enum LocationsParseError {
    #[error("unexpected element '{tag}' in locations document")]
    MalformedDocument { tag: String },

    #[error("location entry is missing its mandatory '{attribute}' attribute")]
    MissingReferenceAttribute { attribute: &'static str },

    #[error("repository reference '{reference}' has no mapping (known: {})", .known.join(", "))]
    UnmappedRepository {
        reference: String,
        known: Vec<String>,
    },

    #[error("malformed locations document")]
    Document {
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute in locations document")]
    Attribute {
        #[source]
        source: AttrError,
    },
}

/// No classification rule matched a stored-attribute bag. Carries the
/// attribute keys that were present so callers can see what was available.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no usable identity could be derived from stored attributes [{}]", .attributes.join(", "))]
pub struct LocationResolutionError {
    pub attributes: Vec<String>,
}

impl LocationResolutionError {
    pub fn new(attributes: Vec<String>) -> Self {
        Self { attributes }
    }
}
