//! Folder tree building for hierarchical display.

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{FolderNode, FolderTree};

use super::hierarchy::{Hierarchy, NodeId};

/// Builds the complete tree of one organization, roots and children
/// sorted by name.
pub(crate) fn build_tree(hierarchy: &Hierarchy, org_id: OrgId) -> FolderTree {
    let mut roots: Vec<FolderNode> = hierarchy
        .roots_in_org(org_id)
        .into_iter()
        .map(|id| build_node(hierarchy, id))
        .collect();

    if roots.is_empty() {
        return FolderTree::empty(org_id);
    }

    roots.sort_by(|a, b| a.name.cmp(&b.name));
    let total_folders = roots.iter().map(FolderNode::subtree_size).sum();

    FolderTree {
        org_id,
        roots,
        total_folders,
    }
}

fn build_node(hierarchy: &Hierarchy, id: NodeId) -> FolderNode {
    let node = hierarchy.node(id);
    let mut children: Vec<FolderNode> = node
        .children
        .iter()
        .map(|&child| build_node(hierarchy, child))
        .collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));

    FolderNode {
        name: node.folder.name.clone(),
        path: node.folder.path.clone(),
        depth: node.folder.depth(),
        child_count: children.len(),
        children,
    }
}
