//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::types::OrgId;

/// Separator between segments of a materialized folder path.
pub const PATH_SEPARATOR: char = '.';

/// A folder record.
///
/// `path` is the dot-delimited chain of ancestor names ending with this
/// folder's own `name`, e.g. `alpha.bravo.charlie`. A path without a
/// separator denotes a root folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name, unique within its organization.
    pub name: String,
    /// The organization owning this folder.
    #[serde(alias = "orgId")]
    pub org_id: OrgId,
    /// Full materialized path.
    #[serde(alias = "paths")]
    pub path: String,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: impl Into<String>, org_id: OrgId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Check if this is a root folder (no parent segment in its path).
    pub fn is_root(&self) -> bool {
        !self.path.contains(PATH_SEPARATOR)
    }

    /// Depth in the folder tree (0 for roots).
    pub fn depth(&self) -> usize {
        self.path.matches(PATH_SEPARATOR).count()
    }
}
