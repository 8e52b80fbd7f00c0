//! Arena-backed folder hierarchy with path, name, and organization indexes.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`]. Nothing is
//! removed from the arena after construction, so ids stay stable for the
//! life of the store. The three indexes are derived from the node set and
//! are only mutated together with the parent/child links.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

use super::path;
use crate::error::HierarchyError;

/// Stable position of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A folder record plus its links.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) folder: Folder,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct Hierarchy {
    nodes: Vec<Node>,
    /// Keyed by organization as well as path so links never cross tenants.
    path_index: HashMap<(OrgId, String), NodeId>,
    name_index: HashMap<String, Vec<NodeId>>,
    org_index: HashMap<OrgId, Vec<NodeId>>,
}

impl Hierarchy {
    /// Validate and index `folders`, then link every record to its parent.
    ///
    /// Records are checked in input order, each against the rules in turn
    /// (duplicate name, repeated path segment, empty name, name/path
    /// mismatch), before any parent link is resolved.
    pub(crate) fn build(folders: Vec<Folder>) -> Result<Self, HierarchyError> {
        let mut hierarchy = Self::default();
        for folder in folders {
            hierarchy.insert(folder)?;
        }
        hierarchy.link()?;

        info!(
            folders = hierarchy.nodes.len(),
            organizations = hierarchy.org_index.len(),
            "Folder hierarchy built"
        );
        Ok(hierarchy)
    }

    fn insert(&mut self, folder: Folder) -> Result<(), HierarchyError> {
        if self.find_in_org(folder.org_id, &folder.name).is_some() {
            return Err(HierarchyError::DuplicateName {
                name: folder.name,
                org_id: folder.org_id,
            });
        }
        if path::has_repeated_segment(&folder.path) {
            return Err(HierarchyError::CyclicPath { path: folder.path });
        }
        if folder.name.is_empty() {
            return Err(HierarchyError::EmptyName { path: folder.path });
        }
        if path::last_segment(&folder.path) != folder.name {
            return Err(HierarchyError::NameMismatch {
                name: folder.name,
                path: folder.path,
            });
        }

        let id = NodeId(self.nodes.len());
        self.path_index
            .insert((folder.org_id, folder.path.clone()), id);
        self.name_index
            .entry(folder.name.clone())
            .or_default()
            .push(id);
        self.org_index.entry(folder.org_id).or_default().push(id);

        debug!(
            name = %folder.name,
            org_id = %folder.org_id,
            path = %folder.path,
            "Indexed folder"
        );

        self.nodes.push(Node {
            folder,
            parent: None,
            children: Vec::new(),
        });
        Ok(())
    }

    fn link(&mut self) -> Result<(), HierarchyError> {
        for index in 0..self.nodes.len() {
            let folder = &self.nodes[index].folder;
            let Some(parent_path) = path::parent_path(&folder.path) else {
                continue;
            };

            let parent = self
                .path_index
                .get(&(folder.org_id, parent_path.to_string()))
                .copied()
                .ok_or_else(|| HierarchyError::ParentNotFound {
                    path: folder.path.clone(),
                    parent_path: parent_path.to_string(),
                    org_id: folder.org_id,
                })?;

            self.nodes[parent.0].children.push(NodeId(index));
            self.nodes[index].parent = Some(parent);
        }
        Ok(())
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every record, in construction order.
    pub(crate) fn snapshot(&self) -> Vec<Folder> {
        self.nodes.iter().map(|node| node.folder.clone()).collect()
    }

    pub(crate) fn folders_in_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.org_index
            .get(&org_id)
            .map(|ids| ids.iter().map(|&id| self.node(id).folder.clone()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn roots_in_org(&self, org_id: OrgId) -> Vec<NodeId> {
        self.org_index
            .get(&org_id)
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|&id| self.node(id).parent.is_none())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn find_by_path(&self, org_id: OrgId, path: &str) -> Option<NodeId> {
        self.path_index.get(&(org_id, path.to_string())).copied()
    }

    fn find_in_org(&self, org_id: OrgId, name: &str) -> Option<NodeId> {
        self.name_index
            .get(name)?
            .iter()
            .copied()
            .find(|&id| self.node(id).folder.org_id == org_id)
    }

    /// Resolve the single folder called `name` in `org_id`.
    pub(crate) fn resolve(&self, org_id: OrgId, name: &str) -> Result<NodeId, HierarchyError> {
        if org_id.is_nil() {
            return Err(HierarchyError::InvalidOrganization { org_id });
        }

        let candidates = self
            .name_index
            .get(name)
            .filter(|ids| !ids.is_empty())
            .ok_or_else(|| HierarchyError::FolderNotFound {
                name: name.to_string(),
            })?;

        let mut matches = candidates
            .iter()
            .copied()
            .filter(|&id| self.node(id).folder.org_id == org_id);

        let found = matches
            .next()
            .ok_or_else(|| HierarchyError::NotInOrganization {
                name: name.to_string(),
                org_id,
            })?;

        if matches.next().is_some() {
            return Err(HierarchyError::AmbiguousName {
                name: name.to_string(),
                org_id,
            });
        }
        Ok(found)
    }

    /// All strict descendants of `id`, depth-first.
    pub(crate) fn descendants(&self, id: NodeId) -> Vec<Folder> {
        let mut collected = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            let node = self.node(next);
            collected.push(node.folder.clone());
            stack.extend(node.children.iter().rev().copied());
        }
        collected
    }

    /// The chain from the root down to `id`, inclusive.
    pub(crate) fn ancestry(&self, id: NodeId) -> Vec<Folder> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(next) = current {
            let node = self.node(next);
            chain.push(node.folder.clone());
            current = node.parent;
        }
        chain.reverse();
        chain
    }

    /// Whether `candidate` is `ancestor` or lies somewhere beneath it.
    pub(crate) fn is_descendant(&self, candidate: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(candidate);
        // A walk longer than the arena would mean the parent links loop.
        for _ in 0..=self.nodes.len() {
            match current {
                Some(id) if id == ancestor => return true,
                Some(id) => current = self.node(id).parent,
                None => return false,
            }
        }
        false
    }

    /// Move the subtree rooted at `source` beneath `destination`.
    ///
    /// All validation happens before the first mutation, so a failed move
    /// leaves the hierarchy untouched.
    pub(crate) fn move_subtree(
        &mut self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        if source == destination {
            return Err(HierarchyError::MoveToSelf {
                name: source.to_string(),
            });
        }

        let org_id = self.shared_organization(source, destination)?;
        let src = self
            .find_in_org(org_id, source)
            .ok_or_else(|| HierarchyError::SourceNotFound {
                name: source.to_string(),
                org_id,
            })?;
        let dst = self
            .find_in_org(org_id, destination)
            .ok_or_else(|| HierarchyError::DestinationNotFound {
                name: destination.to_string(),
                org_id,
            })?;

        if self.is_descendant(dst, src) {
            return Err(HierarchyError::DestinationIsDescendant {
                source_name: source.to_string(),
                destination: destination.to_string(),
            });
        }

        if self.node(src).parent == Some(dst) {
            debug!(source, destination, "Folder already under destination");
            return Ok(self.snapshot());
        }

        if let Some(old_parent) = self.node(src).parent {
            self.remove_child(old_parent, src)?;
        }
        self.nodes[dst.0].children.push(src);
        self.nodes[src.0].parent = Some(dst);

        let old_path = self.node(src).folder.path.clone();
        let new_path = path::join(&self.node(dst).folder.path, source);
        let rewritten = self.rewrite_paths(src, new_path.clone());

        info!(
            source,
            destination,
            org_id = %org_id,
            old_path = %old_path,
            new_path = %new_path,
            rewritten,
            "Folder moved"
        );
        Ok(self.snapshot())
    }

    fn orgs_named(&self, name: &str) -> HashSet<OrgId> {
        self.name_index
            .get(name)
            .map(|ids| ids.iter().map(|&id| self.node(id).folder.org_id).collect())
            .unwrap_or_default()
    }

    /// The one organization holding folders named both `source` and
    /// `destination`. A name pair is assumed to identify one organization;
    /// when it does not, the move is refused.
    fn shared_organization(&self, source: &str, destination: &str) -> Result<OrgId, HierarchyError> {
        let source_orgs = self.orgs_named(source);
        let shared: Vec<OrgId> = self
            .orgs_named(destination)
            .into_iter()
            .filter(|org_id| source_orgs.contains(org_id))
            .collect();

        match shared.as_slice() {
            [] => Err(HierarchyError::NoMatchingOrganization {
                source_name: source.to_string(),
                destination: destination.to_string(),
            }),
            [org_id] => Ok(*org_id),
            many => Err(HierarchyError::AmbiguousOrganization {
                source_name: source.to_string(),
                destination: destination.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Unlink `child` from `parent`'s children. Failure means the links
    /// were already corrupt.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HierarchyError> {
        let position = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| HierarchyError::ChildNotFound {
                child: self.node(child).folder.name.clone(),
                parent: self.node(parent).folder.name.clone(),
            })?;
        self.nodes[parent.0].children.remove(position);
        Ok(())
    }

    /// Assign `new_path` to `root` and re-derive every descendant's path,
    /// parents before children, keeping the path index in step. Returns the
    /// number of records rewritten.
    fn rewrite_paths(&mut self, root: NodeId, new_path: String) -> usize {
        let mut stack = vec![(root, new_path)];
        let mut rewritten = 0;

        while let Some((id, new_path)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            let org_id = node.folder.org_id;
            let old_path = std::mem::replace(&mut node.folder.path, new_path.clone());
            let children = node.children.clone();

            let old_key = (org_id, old_path);
            if self.path_index.get(&old_key) == Some(&id) {
                self.path_index.remove(&old_key);
            }
            self.path_index.insert((org_id, new_path.clone()), id);
            debug!(old_path = %old_key.1, new_path = %new_path, "Rewrote folder path");

            for child in children.into_iter().rev() {
                let child_path = path::join(&new_path, &self.node(child).folder.name);
                stack.push((child, child_path));
            }
            rewritten += 1;
        }
        rewritten
    }

    /// Audit links, paths, and the path index against each other.
    pub(crate) fn check_consistency(&self) -> Result<(), HierarchyError> {
        let inconsistent = |detail: String| Err(HierarchyError::Inconsistent { detail });

        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index);
            let folder = &node.folder;

            let expected_path = match node.parent {
                Some(parent) => {
                    let parent_node = self.node(parent);
                    if parent_node.folder.org_id != folder.org_id {
                        return inconsistent(format!(
                            "'{}' is linked to a parent in another organization",
                            folder.path
                        ));
                    }
                    if !parent_node.children.contains(&id) {
                        return inconsistent(format!(
                            "'{}' is missing from the children of '{}'",
                            folder.path, parent_node.folder.path
                        ));
                    }
                    path::join(&parent_node.folder.path, &folder.name)
                }
                None => folder.name.clone(),
            };
            if folder.path != expected_path {
                return inconsistent(format!(
                    "path '{}' should be '{}'",
                    folder.path, expected_path
                ));
            }

            for &child in &node.children {
                if self.node(child).parent != Some(id) {
                    return inconsistent(format!(
                        "'{}' lists '{}' as a child but is not its parent",
                        folder.path,
                        self.node(child).folder.path
                    ));
                }
            }

            if self.find_by_path(folder.org_id, &folder.path) != Some(id) {
                return inconsistent(format!("path index has no entry for '{}'", folder.path));
            }
        }

        if self.path_index.len() != self.nodes.len() {
            return inconsistent(format!(
                "path index holds {} entries for {} folders",
                self.path_index.len(),
                self.nodes.len()
            ));
        }
        Ok(())
    }
}
