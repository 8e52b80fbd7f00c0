//! Shared test helpers for integration tests.

#![allow(dead_code)]

use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;
use folderhub_service::HierarchyStore;

/// Shorthand for a folder record.
pub fn folder(name: &str, org_id: OrgId, path: &str) -> Folder {
    Folder::new(name, org_id, path)
}

/// Build a store that must be valid.
pub fn store(folders: Vec<Folder>) -> HierarchyStore {
    HierarchyStore::new(folders).expect("Failed to build hierarchy")
}

/// Two organizations and the folder set most query tests start from.
pub struct Fixture {
    pub org1: OrgId,
    pub org2: OrgId,
    pub folders: Vec<Folder>,
}

impl Fixture {
    pub fn new() -> Self {
        let org1 = OrgId::new();
        let org2 = OrgId::new();
        let folders = vec![
            folder("alpha", org1, "alpha"),
            folder("bravo", org1, "alpha.bravo"),
            folder("charlie", org1, "alpha.bravo.charlie"),
            folder("delta", org1, "alpha.delta"),
            folder("echo", org1, "echo"),
            folder("foxtrot", org2, "foxtrot"),
            folder("golf", org2, "foxtrot.golf"),
        ];
        Self {
            org1,
            org2,
            folders,
        }
    }

    pub fn store(&self) -> HierarchyStore {
        store(self.folders.clone())
    }
}

/// Sort by (name, organization, path) so results compare as sets.
pub fn sorted(mut folders: Vec<Folder>) -> Vec<Folder> {
    folders.sort_by(|a, b| {
        (&a.name, a.org_id, &a.path).cmp(&(&b.name, b.org_id, &b.path))
    });
    folders
}

/// Assert two record lists hold the same folders, ignoring order.
pub fn assert_same_folders(got: Vec<Folder>, want: Vec<Folder>) {
    assert_eq!(sorted(got), sorted(want));
}
