// Typed classification of a stored location.
// Closed sum type; downstream code matches exhaustively on the four cases.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

/// Project attributes carried by a root-relative file that also knows its
/// containing project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    pub name: String,
    pub path: String,
    pub relative_path: String,
}

/// A concrete testable input derived from a stored location.
///
/// Equality and hashing use the variant identity only: the path for the
/// file-like variants, the URI for a remote resource. Attribute bags and
/// project metadata do not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestableInput {
    /// An undecomposed path, kept verbatim.
    RawPath { path: String },

    /// A file addressed from the workspace root.
    FileInRoot {
        path: String,
        project: Option<ProjectAttributes>,
        attributes: BTreeMap<String, String>,
    },

    /// A file addressed relative to a named project.
    FileInProject {
        path: String,
        project_name: String,
        project_path: String,
        project_relative_path: String,
        attributes: BTreeMap<String, String>,
    },

    /// A resource addressed by URI. Its project-relative path is the URI
    /// itself.
    RemoteResource {
        uri: String,
        project_name: String,
        project_path: String,
        project_relative_path: String,
        attributes: BTreeMap<String, String>,
    },
}

impl TestableInput {
    /// Display name, doubling as the identity field.
    pub fn name(&self) -> &str {
        match self {
            Self::RawPath { path } => path,
            Self::FileInRoot { path, .. } => path,
            Self::FileInProject { path, .. } => path,
            Self::RemoteResource { uri, .. } => uri,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::RawPath { .. } => "raw_path",
            Self::FileInRoot { .. } => "file_in_root",
            Self::FileInProject { .. } => "file_in_project",
            Self::RemoteResource { .. } => "remote_resource",
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        match self {
            Self::RawPath { .. } => None,
            Self::FileInRoot { project, .. } => project.as_ref().map(|p| p.name.as_str()),
            Self::FileInProject { project_name, .. } => Some(project_name),
            Self::RemoteResource { project_name, .. } => Some(project_name),
        }
    }

    pub fn project_path(&self) -> Option<&str> {
        match self {
            Self::RawPath { .. } => None,
            Self::FileInRoot { project, .. } => project.as_ref().map(|p| p.path.as_str()),
            Self::FileInProject { project_path, .. } => Some(project_path),
            Self::RemoteResource { project_path, .. } => Some(project_path),
        }
    }

    pub fn project_relative_path(&self) -> Option<&str> {
        match self {
            Self::RawPath { .. } => None,
            Self::FileInRoot { project, .. } => project.as_ref().map(|p| p.relative_path.as_str()),
            Self::FileInProject {
                project_relative_path,
                ..
            } => Some(project_relative_path),
            Self::RemoteResource {
                project_relative_path,
                ..
            } => Some(project_relative_path),
        }
    }

    /// Opaque attribute lookup. Raw paths carry no attributes.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            Self::RawPath { .. } => None,
            Self::FileInRoot { attributes, .. }
            | Self::FileInProject { attributes, .. }
            | Self::RemoteResource { attributes, .. } => {
                attributes.get(key).map(String::as_str)
            }
        }
    }
}

impl PartialEq for TestableInput {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other) && self.name() == other.name()
    }
}

impl Eq for TestableInput {}

impl Hash for TestableInput {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        self.name().hash(state);
    }
}
