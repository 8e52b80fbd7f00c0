//! Helpers for dot-delimited folder paths.

use std::collections::HashSet;

use folderhub_entity::folder::model::PATH_SEPARATOR;

/// Strip the last segment of `path`. Returns `None` for a root path.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind(PATH_SEPARATOR).map(|idx| &path[..idx])
}

/// The last segment of `path`.
pub fn last_segment(path: &str) -> &str {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => &path[idx + PATH_SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Append `name` to `parent`.
pub fn join(parent: &str, name: &str) -> String {
    format!("{parent}{PATH_SEPARATOR}{name}")
}

/// Whether any segment appears more than once in `path`.
pub fn has_repeated_segment(path: &str) -> bool {
    let mut seen = HashSet::new();
    path.split(PATH_SEPARATOR).any(|segment| !seen.insert(segment))
}
