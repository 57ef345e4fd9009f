// Matching strategy layered over the classification rules.
// Falls back to path decomposition when a bag only carries a raw location.

use std::collections::BTreeMap;

use tracing::debug;

use crate::location::error::LocationResolutionError;
use crate::location::factory::classify_identity;
use crate::location::input::TestableInput;
use crate::location::stored::StoredLocation;

/// Strategy deciding which testable input a stored location maps to.
///
/// `accept_modified` tells the matcher whether an input reflecting local
/// modifications is acceptable; strategies that cannot tell the difference
/// ignore it.
pub trait LocationMatcher {
    fn find_matching_input(
        &self,
        stored: &StoredLocation,
        accept_modified: bool,
    ) -> Result<TestableInput, LocationResolutionError>;
}

/// Identity rules first, then raw-location decomposition.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLocationMatcher;

impl LocationMatcher for DefaultLocationMatcher {
    fn find_matching_input(
        &self,
        stored: &StoredLocation,
        _accept_modified: bool,
    ) -> Result<TestableInput, LocationResolutionError> {
        if let Some(input) = classify_identity(stored) {
            return Ok(input);
        }
        if let Some(location) = stored.location() {
            debug!(location, "no identity attributes matched, decomposing raw location");
            return Ok(decompose_path(location));
        }
        Err(LocationResolutionError::new(stored.attribute_names()))
    }
}

/// Splits a bare path into project name / project path / relative path.
///
/// Segments are the non-empty parts between `/` separators. Zero or one
/// segments stay a raw path. Two segments `[A, B]` make A the project with
/// project path `/A`. Three or more `[A, B, rest..]` make B the project with
/// project path `A/B`, treating A as a workspace-root prefix. The two-segment
/// and three-segment rules pick different segments on purpose; previously
/// generated reports encode exactly this split.
pub fn decompose_path(path: &str) -> TestableInput {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    match segments.as_slice() {
        [] | [_] => TestableInput::RawPath {
            path: path.to_string(),
        },
        [project, relative] => TestableInput::FileInProject {
            path: path.to_string(),
            project_name: (*project).to_string(),
            project_path: format!("/{project}"),
            project_relative_path: (*relative).to_string(),
            attributes: BTreeMap::new(),
        },
        [root, project, rest @ ..] => TestableInput::FileInProject {
            path: path.to_string(),
            project_name: (*project).to_string(),
            project_path: format!("{root}/{project}"),
            project_relative_path: rest.join("/"),
            attributes: BTreeMap::new(),
        },
    }
}
