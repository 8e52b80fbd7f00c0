//! Loading flat folder record lists: the built-in sample set and JSON seed files.

use std::path::Path;

use tracing::debug;
use uuid::Uuid;

use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

/// Organization that owns most of the built-in sample folders.
pub const DEFAULT_ORG_ID: OrgId = OrgId(Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a));

const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

/// The built-in sample record set.
pub fn sample_folders() -> AppResult<Vec<Folder>> {
    Ok(serde_json::from_str(SAMPLE_DATA)?)
}

/// Read a JSON array of folder records from `path`.
pub fn load_folders(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let folders: Vec<Folder> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), count = folders.len(), "Loaded folder seed file");
    Ok(folders)
}
