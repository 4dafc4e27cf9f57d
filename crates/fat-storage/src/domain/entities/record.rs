//! # File Record
//!
//! The metadata entry identifying one logical file. Keyed by name and
//! overwritten in place on every mutation.
//!
//! ## Trash consistency
//!
//! `trashed` is true if and only if `deleted_at` is set. Every mutator on
//! this type keeps the two fields in step.

use serde::{Deserialize, Serialize};

use super::{BlockRef, Timestamp};

/// Persisted file metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique file name (primary key). Immutable after creation.
    pub name: String,
    /// First block of the chain; `None` iff the content is empty.
    pub head_ref: Option<BlockRef>,
    /// Character count of the content as of the last successful write.
    pub total_size: u64,
    /// Soft-delete flag.
    #[serde(default)]
    pub trashed: bool,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    /// Set while the file is in the trash.
    pub deleted_at: Option<Timestamp>,
}

impl FileRecord {
    /// Create a record for a freshly written chain.
    pub fn new(
        name: impl Into<String>,
        head_ref: Option<BlockRef>,
        total_size: u64,
        now: Timestamp,
    ) -> Self {
        Self {
            name: name.into(),
            head_ref,
            total_size,
            trashed: false,
            created_at: now,
            modified_at: now,
            deleted_at: None,
        }
    }

    /// Point the record at a rebuilt chain. `created_at` is left alone.
    pub fn replace_chain(&mut self, head_ref: Option<BlockRef>, total_size: u64, now: Timestamp) {
        self.head_ref = head_ref;
        self.total_size = total_size;
        self.modified_at = now;
    }

    /// Mark as trashed. Re-applying refreshes `deleted_at`.
    pub fn move_to_trash(&mut self, now: Timestamp) {
        self.trashed = true;
        self.deleted_at = Some(now);
    }

    /// Take the record out of the trash.
    pub fn restore(&mut self) {
        self.trashed = false;
        self.deleted_at = None;
    }

    /// `trashed ⇔ deleted_at.is_some()`.
    pub fn is_trash_consistent(&self) -> bool {
        self.trashed == self.deleted_at.is_some()
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            name: self.name.clone(),
            total_size: self.total_size,
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }

    /// Trash listing entry, or `None` if the record is live.
    pub fn trash_entry(&self) -> Option<TrashEntry> {
        match (self.trashed, self.deleted_at) {
            (true, Some(deleted_at)) => Some(TrashEntry {
                name: self.name.clone(),
                total_size: self.total_size,
                deleted_at,
            }),
            _ => None,
        }
    }
}

/// One line of `list()` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub total_size: u64,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// One line of `list_trash()` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrashEntry {
    pub name: String,
    pub total_size: u64,
    pub deleted_at: Timestamp,
}

/// Result of `open()`: the record plus its reconstructed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub record: FileRecord,
    pub content: String,
}
