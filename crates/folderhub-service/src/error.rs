//! Error type for the folder hierarchy engine.
//!
//! Every failure the engine can report is a variant of [`HierarchyError`]
//! carrying the names, paths, and organization involved. Variants map
//! onto `folderhub_core::error::AppError` for the binaries.

use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;
use thiserror::Error;

/// Broad classification of a [`HierarchyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input record list was rejected; no store was built.
    Construction,
    /// A query argument was invalid or did not resolve.
    Validation,
    /// A move request was rejected before any state changed.
    Move,
    /// The store's internal invariants are broken.
    Internal,
}

/// Errors raised while building, querying, or mutating a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    // --- Construction errors ---
    /// Two records share a name within one organization.
    #[error("duplicate folder name '{name}' in organization '{org_id}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// The organization containing both records.
        org_id: OrgId,
    },

    /// A path repeats one of its own segments.
    #[error("cycle in folder path '{path}'")]
    CyclicPath {
        /// The offending path.
        path: String,
    },

    /// A record has an empty name.
    #[error("folder at path '{path}' has an empty name")]
    EmptyName {
        /// Path of the nameless record.
        path: String,
    },

    /// A record's path does not end with its own name.
    #[error("folder path '{path}' does not end with folder name '{name}'")]
    NameMismatch {
        /// The record's name.
        name: String,
        /// The record's path.
        path: String,
    },

    /// A record's parent path does not match any record in its organization.
    #[error("parent path '{parent_path}' not found for folder '{path}' in organization '{org_id}'")]
    ParentNotFound {
        /// The child's full path.
        path: String,
        /// The parent path that failed to resolve.
        parent_path: String,
        /// The child's organization.
        org_id: OrgId,
    },

    // --- Query validation errors ---
    /// The nil organization id was supplied.
    #[error("invalid organization id '{org_id}'")]
    InvalidOrganization {
        /// The rejected id.
        org_id: OrgId,
    },

    /// No folder with this name exists in any organization.
    #[error("folder '{name}' does not exist")]
    FolderNotFound {
        /// The name looked up.
        name: String,
    },

    /// The name exists, but not in the requested organization.
    #[error("folder '{name}' does not exist in organization '{org_id}'")]
    NotInOrganization {
        /// The name looked up.
        name: String,
        /// The requested organization.
        org_id: OrgId,
    },

    /// More than one folder carries this name in the organization.
    #[error("more than one folder named '{name}' exists in organization '{org_id}'")]
    AmbiguousName {
        /// The ambiguous name.
        name: String,
        /// The organization holding the duplicates.
        org_id: OrgId,
    },

    // --- Move errors ---
    /// Source and destination are the same folder name.
    #[error("cannot move folder '{name}' to itself")]
    MoveToSelf {
        /// The folder name.
        name: String,
    },

    /// No organization holds folders with both names.
    #[error("no organization contains both '{source_name}' and '{destination}'")]
    NoMatchingOrganization {
        /// Source folder name.
        source_name: String,
        /// Destination folder name.
        destination: String,
    },

    /// Several organizations hold folders with both names.
    #[error("{count} organizations contain both '{source_name}' and '{destination}'")]
    AmbiguousOrganization {
        /// Source folder name.
        source_name: String,
        /// Destination folder name.
        destination: String,
        /// Number of organizations matching the pair.
        count: usize,
    },

    /// The source folder is missing from the resolved organization.
    #[error("source folder '{name}' not found in organization '{org_id}'")]
    SourceNotFound {
        /// Source folder name.
        name: String,
        /// The resolved organization.
        org_id: OrgId,
    },

    /// The destination folder is missing from the resolved organization.
    #[error("destination folder '{name}' not found in organization '{org_id}'")]
    DestinationNotFound {
        /// Destination folder name.
        name: String,
        /// The resolved organization.
        org_id: OrgId,
    },

    /// The destination lies inside the subtree being moved.
    #[error("destination folder '{destination}' is a descendant of source folder '{source_name}'")]
    DestinationIsDescendant {
        /// Source folder name.
        source_name: String,
        /// Destination folder name.
        destination: String,
    },

    // --- Internal consistency faults ---
    /// A child was not listed under the parent it points to.
    #[error("child folder '{child}' not found under parent '{parent}'")]
    ChildNotFound {
        /// The child's name.
        child: String,
        /// The recorded parent's name.
        parent: String,
    },

    /// A consistency audit found broken links or a stale index entry.
    #[error("hierarchy is inconsistent: {detail}")]
    Inconsistent {
        /// What the audit found.
        detail: String,
    },
}

impl HierarchyError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateName { .. }
            | Self::CyclicPath { .. }
            | Self::EmptyName { .. }
            | Self::NameMismatch { .. }
            | Self::ParentNotFound { .. } => ErrorCategory::Construction,
            Self::InvalidOrganization { .. }
            | Self::FolderNotFound { .. }
            | Self::NotInOrganization { .. }
            | Self::AmbiguousName { .. } => ErrorCategory::Validation,
            Self::MoveToSelf { .. }
            | Self::NoMatchingOrganization { .. }
            | Self::AmbiguousOrganization { .. }
            | Self::SourceNotFound { .. }
            | Self::DestinationNotFound { .. }
            | Self::DestinationIsDescendant { .. } => ErrorCategory::Move,
            Self::ChildNotFound { .. } | Self::Inconsistent { .. } => ErrorCategory::Internal,
        }
    }
}

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        match &err {
            HierarchyError::DuplicateName { .. }
            | HierarchyError::CyclicPath { .. }
            | HierarchyError::AmbiguousName { .. }
            | HierarchyError::AmbiguousOrganization { .. } => AppError::conflict(err.to_string()),
            HierarchyError::FolderNotFound { .. }
            | HierarchyError::NotInOrganization { .. }
            | HierarchyError::NoMatchingOrganization { .. }
            | HierarchyError::SourceNotFound { .. }
            | HierarchyError::DestinationNotFound { .. } => AppError::not_found(err.to_string()),
            HierarchyError::ChildNotFound { .. } | HierarchyError::Inconsistent { .. } => {
                AppError::internal(err.to_string())
            }
            _ => AppError::validation(err.to_string()),
        }
    }
}
