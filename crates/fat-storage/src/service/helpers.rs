//! # File Storage Service - Helper Methods
//!
//! Private helper methods for the FileStorageService.

use super::*;
use crate::domain::entities::FileRecord;
use crate::domain::errors::StorageError;

impl<KV, TS, KG, RS> FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    /// Load a record that must not be in the trash.
    pub(crate) fn load_live(&self, name: &str) -> Result<FileRecord, StorageError> {
        let record = self.records.load(name)?;
        if record.trashed {
            return Err(StorageError::InTrash {
                name: name.to_string(),
            });
        }
        Ok(record)
    }
}

/// Character count used for `total_size`.
pub(crate) fn char_count(content: &str) -> u64 {
    content.chars().count() as u64
}
