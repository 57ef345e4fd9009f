// Attribute-presence classification of a stored location.
// Rule order and the exact shape of each produced input are compatibility
// surface: previously generated reports depend on them.

use std::collections::BTreeMap;
use std::path::Path;

use crate::location::error::LocationResolutionError;
use crate::location::input::{ProjectAttributes, TestableInput};
use crate::location::schema;
use crate::location::stored::StoredLocation;

/// Classifies a stored-attribute bag into a testable input.
///
/// Fails when no rule matches; see [`classify_identity`] for the rules.
pub fn classify(stored: &StoredLocation) -> Result<TestableInput, LocationResolutionError> {
    classify_identity(stored)
        .ok_or_else(|| LocationResolutionError::new(stored.attribute_names()))
}

/// Applies the classification rules in priority order, returning `None` when
/// none of them matches:
///
/// 1. project id + project-relative path: a root file at the platform join
///    of the two, carrying project attributes only when the project path and
///    project name are both present (plus the symbol list, when stored);
/// 2. no project id, but a source-control path: a root file named by it;
/// 3. URI + project id + project name: a remote resource whose project path
///    equals the project name and whose project-relative path is the URI.
pub(crate) fn classify_identity(stored: &StoredLocation) -> Option<TestableInput> {
    if let (Some(project_id), Some(relative)) =
        (stored.project_id(), stored.project_relative_path())
    {
        let path = Path::new(project_id).join(relative).to_string_lossy().into_owned();
        let (project, attributes) = match (stored.project_path(), stored.project_name()) {
            (Some(project_path), Some(project_name)) => {
                let mut attributes = BTreeMap::new();
                if let Some(symbols) = stored.symbols() {
                    attributes.insert(schema::ATTR_SYMBOLS.to_string(), symbols.to_string());
                }
                let project = ProjectAttributes {
                    name: project_name.to_string(),
                    path: project_path.to_string(),
                    relative_path: relative.to_string(),
                };
                (Some(project), attributes)
            }
            _ => (None, BTreeMap::new()),
        };
        return Some(TestableInput::FileInRoot {
            path,
            project,
            attributes,
        });
    }

    if stored.project_id().is_none() {
        if let Some(source_control_path) = stored.source_control_path() {
            return Some(TestableInput::FileInRoot {
                path: source_control_path.to_string(),
                project: None,
                attributes: BTreeMap::new(),
            });
        }
    }

    if let (Some(uri), Some(_), Some(project_name)) =
        (stored.uri(), stored.project_id(), stored.project_name())
    {
        return Some(TestableInput::RemoteResource {
            uri: uri.to_string(),
            project_name: project_name.to_string(),
            project_path: project_name.to_string(),
            project_relative_path: uri.to_string(),
            attributes: BTreeMap::new(),
        });
    }

    None
}
