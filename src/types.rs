//! Common types used throughout tenant-folders
//!
//! Request, response and record types shared by the filter,
//! the paginator and the CLI.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Folder
// ============================================================================

/// A tenant-scoped folder record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Globally unique folder identifier
    pub id: Uuid,
    /// Display name, not unique
    pub name: String,
    /// Owning organization
    pub org_id: Uuid,
    /// Soft-delete marker
    #[serde(default)]
    pub deleted: bool,
}

impl Folder {
    /// Create a live (not deleted) folder with a fresh id
    pub fn new(name: impl Into<String>, org_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            org_id,
            deleted: false,
        }
    }

    /// Mark the folder as soft-deleted
    #[must_use]
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }
}

// ============================================================================
// Deleted Filter
// ============================================================================

/// How soft-deleted folders are treated by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletedFilter {
    /// Return deleted folders alongside live ones
    #[default]
    Include,
    /// Drop folders marked as deleted
    Exclude,
}

impl DeletedFilter {
    /// Check whether a folder passes this filter
    pub fn admits(self, folder: &Folder) -> bool {
        match self {
            DeletedFilter::Include => true,
            DeletedFilter::Exclude => !folder.deleted,
        }
    }
}

// ============================================================================
// Fetch Request
// ============================================================================

/// Caller intent for a folder fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchRequest {
    /// Organization to filter on; must not be nil
    pub org_id: Uuid,
    /// Return one window instead of the full result
    pub paginate: bool,
    /// Continuation token; empty means first page
    pub page_token: String,
    /// Soft-delete handling
    pub deleted: DeletedFilter,
}

impl FetchRequest {
    /// Create a non-paginated request for an organization
    pub fn new(org_id: Uuid) -> Self {
        Self {
            org_id,
            ..Default::default()
        }
    }

    /// Switch to windowed mode
    #[must_use]
    pub fn paginated(mut self) -> Self {
        self.paginate = true;
        self
    }

    /// Resume from a continuation token
    #[must_use]
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = token.into();
        self
    }

    /// Set soft-delete handling
    #[must_use]
    pub fn with_deleted(mut self, deleted: DeletedFilter) -> Self {
        self.deleted = deleted;
        self
    }
}

// ============================================================================
// Fetch Response
// ============================================================================

/// Result envelope of a fetch or paginate call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    /// Matching folders in provider order
    pub folders: Vec<Arc<Folder>>,
    /// Continuation token, empty on the last page
    pub next_page_token: String,
}

impl FetchResponse {
    /// Create a response
    pub fn new(folders: Vec<Arc<Folder>>, next_page_token: impl Into<String>) -> Self {
        Self {
            folders,
            next_page_token: next_page_token.into(),
        }
    }

    /// Check if another page can be requested
    pub fn has_next_page(&self) -> bool {
        !self.next_page_token.is_empty()
    }

    /// Number of folders in this response
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if the response holds no folders
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
