//! The operations the hierarchy exposes to callers.

use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

use crate::error::HierarchyError;

/// Query and move operations over an organization-scoped folder hierarchy.
///
/// Results are snapshot copies; mutating them never affects the store.
pub trait FolderDriver: Send + Sync {
    /// Returns every folder belonging to `org_id`.
    ///
    /// Never fails: an unknown or nil organization yields an empty list.
    fn get_folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder>;

    /// Returns every strict descendant of the folder named `name` in `org_id`.
    fn get_all_child_folders(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError>;

    /// Moves the subtree rooted at `source` under `destination` and returns
    /// a snapshot of every folder in the store afterwards.
    fn move_folder(&self, source: &str, destination: &str)
    -> Result<Vec<Folder>, HierarchyError>;
}
