//! The shared, lock-guarded hierarchy store.

use std::path::Path;

use parking_lot::RwLock;
use tracing::debug;

use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderTree};

use super::driver::FolderDriver;
use super::hierarchy::Hierarchy;
use super::{seed, tree};
use crate::error::HierarchyError;

/// Owns every folder record and its indexes behind a single lock.
///
/// Reads take the shared lock and may run concurrently. A move takes the
/// exclusive lock for detachment, reattachment, and the whole path
/// rewrite, so no reader ever sees a half-moved subtree.
#[derive(Debug)]
pub struct HierarchyStore {
    inner: RwLock<Hierarchy>,
}

impl HierarchyStore {
    /// Build a store from a flat record list.
    ///
    /// Fails on the first duplicate name within an organization, path with
    /// a repeated segment, empty name, path not ending in its name, or
    /// path whose parent does not exist. No partial store is returned.
    pub fn new(folders: Vec<Folder>) -> Result<Self, HierarchyError> {
        let hierarchy = Hierarchy::build(folders)?;
        Ok(Self {
            inner: RwLock::new(hierarchy),
        })
    }

    /// Build a store from a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let folders = seed::load_folders(path)?;
        Ok(Self::new(folders)?)
    }

    /// Build a store from the built-in sample data.
    pub fn sample() -> AppResult<Self> {
        let folders = seed::sample_folders()?;
        Ok(Self::new(folders)?)
    }

    /// Number of folders in the store.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every folder, in construction order.
    pub fn get_all_folders(&self) -> Vec<Folder> {
        self.inner.read().snapshot()
    }

    /// Look up a folder by its full dotted path within an organization.
    pub fn resolve_path(&self, org_id: OrgId, path: &str) -> Option<Folder> {
        let hierarchy = self.inner.read();
        hierarchy
            .find_by_path(org_id, path)
            .map(|id| hierarchy.node(id).folder.clone())
    }

    /// The ancestor chain of `name` in `org_id`, root first, ending with
    /// the folder itself.
    pub fn breadcrumbs(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, HierarchyError> {
        let hierarchy = self.inner.read();
        let id = hierarchy.resolve(org_id, name)?;
        Ok(hierarchy.ancestry(id))
    }

    /// The full folder tree of one organization.
    pub fn folder_tree(&self, org_id: OrgId) -> Result<FolderTree, HierarchyError> {
        if org_id.is_nil() {
            return Err(HierarchyError::InvalidOrganization { org_id });
        }
        let hierarchy = self.inner.read();
        Ok(tree::build_tree(&hierarchy, org_id))
    }

    /// Audit parent/child links, paths, and the path index.
    pub fn check_consistency(&self) -> Result<(), HierarchyError> {
        self.inner.read().check_consistency()
    }
}

impl FolderDriver for HierarchyStore {
    fn get_folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder> {
        self.inner.read().folders_in_org(org_id)
    }

    fn get_all_child_folders(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        let hierarchy = self.inner.read();
        let id = hierarchy.resolve(org_id, name)?;
        let children = hierarchy.descendants(id);
        if children.is_empty() {
            debug!(name, org_id = %org_id, "Folder has no child folders");
        }
        Ok(children)
    }

    fn move_folder(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        self.inner.write().move_subtree(source, destination)
    }
}
