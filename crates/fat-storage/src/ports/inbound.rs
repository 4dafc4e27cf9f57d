//! # Inbound Ports (Driving Ports)
//!
//! The file-level API exposed to drivers (command line, tests).
//!
//! ## Trash state machine
//!
//! ```text
//!            create
//!              │
//!              ▼
//!        ┌──────────┐   delete    ┌─────────┐
//!        │   live   │ ──────────→ │ trashed │ ──┐ delete
//!        │          │ ←────────── │         │ ←─┘ (refreshes deleted_at)
//!        └──────────┘   recover   └─────────┘
//! ```
//!
//! There is no terminal state: trashed files stay recoverable.

use crate::domain::entities::{FileRecord, FileSummary, OpenedFile, TrashEntry};
use crate::domain::errors::StorageError;
use crate::domain::integrity::IntegrityReport;

/// Primary API of the storage engine.
///
/// Mutating operations take `&mut self`, so one operation runs to
/// completion before the next can start.
pub trait FileStorageApi {
    /// Create a file from `content`.
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a record for `name` exists (live or trashed)
    /// - `Io`: backend failure
    fn create(&mut self, name: &str, content: &str) -> Result<FileRecord, StorageError>;

    /// Summaries of all live files, ordered by creation time then name.
    fn list(&self) -> Result<Vec<FileSummary>, StorageError>;

    /// Trashed files, ordered by deletion time then name.
    fn list_trash(&self) -> Result<Vec<TrashEntry>, StorageError>;

    /// Read a file's metadata and full content.
    ///
    /// ## Errors
    ///
    /// - `FileNotFound`: no record for `name`
    /// - `InTrash`: the file is trashed
    /// - `ChainBroken`: the chain references a missing block
    fn open(&self, name: &str) -> Result<OpenedFile, StorageError>;

    /// A file's record regardless of trash state, without reading its chain.
    ///
    /// ## Errors
    ///
    /// - `FileNotFound`: no record for `name`
    fn stat(&self, name: &str) -> Result<FileRecord, StorageError>;

    /// Replace a file's content.
    ///
    /// Destroys the old chain in full, writes a new one, then updates the
    /// record. Commits unconditionally: any confirmation belongs to the
    /// caller.
    ///
    /// ## Non-atomicity
    ///
    /// A failure after the old chain is deleted leaves the record pointing
    /// at a destroyed chain. A failure on the final record write leaves the
    /// new chain unreferenced. Neither case is rolled back.
    ///
    /// ## Errors
    ///
    /// - `FileNotFound`, `InTrash`: as for `open`; storage is untouched
    /// - `ChainBroken`: the old chain could not be fully deleted
    /// - `Io`: backend failure
    fn modify(&mut self, name: &str, new_content: &str) -> Result<FileRecord, StorageError>;

    /// Move a file to the trash. Idempotent; blocks are untouched.
    ///
    /// ## Errors
    ///
    /// - `FileNotFound`: no record for `name`
    fn delete(&mut self, name: &str) -> Result<FileRecord, StorageError>;

    /// Take a file out of the trash.
    ///
    /// ## Errors
    ///
    /// - `FileNotFound`: no record for `name`
    /// - `NotInTrash`: the file is live
    fn recover(&mut self, name: &str) -> Result<FileRecord, StorageError>;

    /// Scan all records and blocks for broken, aliased and orphaned chains.
    /// Read-only.
    fn check_integrity(&self) -> Result<IntegrityReport, StorageError>;
}
