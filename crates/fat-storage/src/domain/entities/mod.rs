//! # Storage Entities
//!
//! Core entities for the FAT chain storage engine.
//!
//! ## Module Structure
//!
//! - `block` - Block and BlockRef
//! - `record` - FileRecord and the views derived from it

mod block;
mod record;


// Re-export public API
pub use block::{Block, BlockRef};
pub use record::{FileRecord, FileSummary, OpenedFile, TrashEntry};

/// UTC wall-clock timestamp.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
