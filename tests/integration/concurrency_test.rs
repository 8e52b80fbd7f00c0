//! Concurrent readers must never observe a half-applied move.

mod helpers;

use std::thread;

use folderhub_core::types::OrgId;
use folderhub_service::FolderDriver;

use helpers::folder;

const MOVES: usize = 200;
const READERS: usize = 4;
const READS_PER_READER: usize = 300;

#[test]
fn test_readers_see_whole_moves_only() {
    let org = OrgId::new();
    let store = helpers::store(vec![
        folder("alpha", org, "alpha"),
        folder("bravo", org, "alpha.bravo"),
        folder("charlie", org, "alpha.bravo.charlie"),
        folder("delta", org, "alpha.delta"),
        folder("echo", org, "alpha.echo"),
    ]);

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..MOVES {
                let destination = if i % 2 == 0 { "delta" } else { "echo" };
                store.move_folder("bravo", destination).expect("move");
            }
        });

        for _ in 0..READERS {
            scope.spawn(|| {
                for _ in 0..READS_PER_READER {
                    let subtree = store
                        .get_all_child_folders(org, "alpha")
                        .expect("alpha resolves");
                    assert_eq!(subtree.len(), 4);
                    assert!(subtree.iter().all(|f| f.path.starts_with("alpha.")));

                    let bravo = subtree
                        .iter()
                        .find(|f| f.name == "bravo")
                        .expect("bravo present");
                    let charlie = subtree
                        .iter()
                        .find(|f| f.name == "charlie")
                        .expect("charlie present");
                    assert_eq!(charlie.path, format!("{}.charlie", bravo.path));

                    store.check_consistency().expect("consistent");
                }
            });
        }
    });

    // The last move has an odd index, so bravo ends under echo.
    assert_eq!(
        store.resolve_path(org, "alpha.echo.bravo.charlie"),
        Some(folder("charlie", org, "alpha.echo.bravo.charlie"))
    );
    store.check_consistency().expect("consistent");
}

#[test]
fn test_parallel_queries_across_orgs() {
    let fixture = helpers::Fixture::new();
    let store = fixture.store();

    thread::scope(|scope| {
        for _ in 0..READERS {
            scope.spawn(|| {
                for _ in 0..READS_PER_READER {
                    assert_eq!(store.get_folders_by_org_id(fixture.org1).len(), 5);
                    assert_eq!(
                        store
                            .get_all_child_folders(fixture.org2, "foxtrot")
                            .expect("foxtrot resolves")
                            .len(),
                        1
                    );
                }
            });
        }
    });
}
