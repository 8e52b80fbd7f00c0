//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use folderhub_core::types::OrgId;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level.
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: usize,
    /// Child folder nodes, sorted by name.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of folders in this subtree, including this node.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::subtree_size)
            .sum::<usize>()
    }
}

/// A complete folder tree for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The organization the tree belongs to.
    pub org_id: OrgId,
    /// The root node(s) of the tree, sorted by name.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty(org_id: OrgId) -> Self {
        Self {
            org_id,
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Render the tree as indented text, one folder per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            render_node(root, 0, &mut out);
        }
        out
    }
}

fn render_node(node: &FolderNode, indent: usize, out: &mut String) {
    out.push_str(&"  ".repeat(indent));
    out.push_str("├── ");
    out.push_str(&node.name);
    out.push('\n');
    for child in &node.children {
        render_node(child, indent + 1, out);
    }
}
