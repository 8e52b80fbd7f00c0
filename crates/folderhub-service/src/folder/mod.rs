//! Folder hierarchy: arena, indexes, locking, and tree views.

pub mod driver;
mod hierarchy;
pub mod path;
pub mod seed;
pub mod store;
mod tree;

pub use driver::FolderDriver;
pub use store::HierarchyStore;
