//! # folderhub-service
//!
//! The hierarchy engine for FolderHub. A [`HierarchyStore`] is built once
//! from a flat list of folder records, validated and linked, and then
//! answers organization and subtree queries and performs subtree moves
//! while keeping its indexes and parent/child links consistent.
//!
//! Every operation is synchronous. Queries share a read lock; moves hold
//! the write lock for their whole duration.

pub mod error;
pub mod folder;

pub use error::{ErrorCategory, HierarchyError};
pub use folder::{FolderDriver, HierarchyStore};
