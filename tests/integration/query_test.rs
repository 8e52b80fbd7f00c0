//! Integration tests for organization and subtree queries.

mod helpers;

use folderhub_core::types::OrgId;
use folderhub_service::{ErrorCategory, FolderDriver, HierarchyError};

use helpers::{Fixture, assert_same_folders, folder};

#[test]
fn test_children_of_leaf_is_empty() {
    let fixture = Fixture::new();
    let store = fixture.store();
    let children = store
        .get_all_child_folders(fixture.org1, "echo")
        .expect("echo exists");
    assert!(children.is_empty());
}

#[test]
fn test_children_include_all_depths() {
    let fixture = Fixture::new();
    let store = fixture.store();
    let org1 = fixture.org1;

    assert_same_folders(
        store.get_all_child_folders(org1, "alpha").unwrap(),
        vec![
            folder("bravo", org1, "alpha.bravo"),
            folder("charlie", org1, "alpha.bravo.charlie"),
            folder("delta", org1, "alpha.delta"),
        ],
    );
    assert_same_folders(
        store.get_all_child_folders(org1, "bravo").unwrap(),
        vec![folder("charlie", org1, "alpha.bravo.charlie")],
    );
}

#[test]
fn test_children_in_second_org() {
    let fixture = Fixture::new();
    let store = fixture.store();
    assert_same_folders(
        store.get_all_child_folders(fixture.org2, "foxtrot").unwrap(),
        vec![folder("golf", fixture.org2, "foxtrot.golf")],
    );
}

#[test]
fn test_nil_org_rejected() {
    let fixture = Fixture::new();
    let store = fixture.store();

    let err = store
        .get_all_child_folders(OrgId::nil(), "alpha")
        .unwrap_err();
    assert_eq!(
        err,
        HierarchyError::InvalidOrganization {
            org_id: OrgId::nil()
        }
    );
    assert_eq!(err.category(), ErrorCategory::Validation);

    // The organization is checked before the name.
    assert!(matches!(
        store.get_all_child_folders(OrgId::nil(), "invalid_folder"),
        Err(HierarchyError::InvalidOrganization { .. })
    ));
}

#[test]
fn test_unknown_names_rejected() {
    let fixture = Fixture::new();
    let store = fixture.store();

    for name in ["invalid_folder", "Alpha", "alp", "", "αlphα", "alpha..bravo", "alpha.bravo"] {
        assert_eq!(
            store.get_all_child_folders(fixture.org1, name).unwrap_err(),
            HierarchyError::FolderNotFound {
                name: name.to_string()
            },
            "lookup of {name:?}"
        );
    }
}

#[test]
fn test_folder_in_other_org_rejected() {
    let fixture = Fixture::new();
    let store = fixture.store();

    assert_eq!(
        store
            .get_all_child_folders(fixture.org1, "foxtrot")
            .unwrap_err(),
        HierarchyError::NotInOrganization {
            name: "foxtrot".to_string(),
            org_id: fixture.org1,
        }
    );

    // A name that exists, queried under an org that has no folders at all.
    assert!(matches!(
        store.get_all_child_folders(OrgId::new(), "alpha"),
        Err(HierarchyError::NotInOrganization { .. })
    ));
}

#[test]
fn test_subtree_matches_path_prefix() {
    let store = folderhub_service::HierarchyStore::sample().expect("sample builds");

    for parent in store.get_all_folders() {
        let prefix = format!("{}.", parent.path);
        let expected: Vec<_> = store
            .get_folders_by_org_id(parent.org_id)
            .into_iter()
            .filter(|f| f.path.starts_with(&prefix))
            .collect();
        let got = store
            .get_all_child_folders(parent.org_id, &parent.name)
            .expect("folder resolves");
        assert_same_folders(got, expected);
    }
}

#[test]
fn test_results_are_snapshots() {
    let fixture = Fixture::new();
    let store = fixture.store();

    let mut children = store.get_all_child_folders(fixture.org1, "alpha").unwrap();
    children[0].path = "tampered".to_string();
    children.clear();

    let mut org_folders = store.get_folders_by_org_id(fixture.org1);
    org_folders[0].name = "tampered".to_string();

    assert_eq!(store.get_all_child_folders(fixture.org1, "alpha").unwrap().len(), 3);
    assert_eq!(store.get_folders_by_org_id(fixture.org1)[0].name, "alpha");
    store.check_consistency().expect("consistent");
}

#[test]
fn test_folders_by_org() {
    let fixture = Fixture::new();
    let store = fixture.store();

    let org1_folders: Vec<_> = fixture
        .folders
        .iter()
        .filter(|f| f.org_id == fixture.org1)
        .cloned()
        .collect();
    assert_same_folders(store.get_folders_by_org_id(fixture.org1), org1_folders);
    assert_eq!(store.get_folders_by_org_id(fixture.org2).len(), 2);
}

#[test]
fn test_folders_by_unknown_or_nil_org_is_empty() {
    let fixture = Fixture::new();
    let store = fixture.store();

    assert!(store.get_folders_by_org_id(OrgId::new()).is_empty());
    assert!(store.get_folders_by_org_id(OrgId::nil()).is_empty());
}

#[test]
fn test_driver_behind_trait_object() {
    let fixture = Fixture::new();
    let driver: Box<dyn FolderDriver> = Box::new(fixture.store());

    assert_eq!(driver.get_folders_by_org_id(fixture.org1).len(), 5);
    assert_eq!(
        driver
            .get_all_child_folders(fixture.org2, "foxtrot")
            .unwrap()
            .len(),
        1
    );
}
