//! # folderhub-entity
//!
//! Domain entity models for FolderHub. Every struct in this crate is a
//! plain value object that derives `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`; the hierarchy engine hands out copies of them as
//! snapshots.

pub mod folder;
