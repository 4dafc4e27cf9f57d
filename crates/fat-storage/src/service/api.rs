//! # File Storage API Implementation
//!
//! Implements the FileStorageApi trait for the file lifecycle.

use tracing::{info, warn};

use super::helpers::char_count;
use super::*;
use crate::domain::chain::{split, traverse};
use crate::domain::entities::{FileRecord, FileSummary, OpenedFile, TrashEntry};
use crate::domain::errors::StorageError;
use crate::domain::integrity::IntegrityReport;
use crate::ports::inbound::FileStorageApi;

impl<KV, TS, KG, RS> FileStorageApi for FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    fn create(&mut self, name: &str, content: &str) -> Result<FileRecord, StorageError> {
        if self.records.exists(name)? {
            return Err(StorageError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let payloads = split(content);
        let head = self.blocks.save_chain(&payloads)?;

        let record = FileRecord::new(name, head, char_count(content), self.time_source.now());
        self.records.save(&record)?;

        info!(
            "[fat] 📄 Created '{}' ({} chars, {} blocks)",
            name,
            record.total_size,
            payloads.len()
        );

        Ok(record)
    }

    fn list(&self) -> Result<Vec<FileSummary>, StorageError> {
        let mut summaries: Vec<FileSummary> = self
            .records
            .list_all()?
            .iter()
            .filter(|record| !record.trashed)
            .map(FileRecord::summary)
            .collect();

        summaries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(summaries)
    }

    fn list_trash(&self) -> Result<Vec<TrashEntry>, StorageError> {
        let mut entries: Vec<TrashEntry> = self
            .records
            .list_all()?
            .iter()
            .filter_map(FileRecord::trash_entry)
            .collect();

        entries.sort_by(|a, b| {
            a.deleted_at
                .cmp(&b.deleted_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    }

    fn open(&self, name: &str) -> Result<OpenedFile, StorageError> {
        let record = self.load_live(name)?;

        let content = traverse(record.head_ref.as_ref(), &self.blocks).inspect_err(|err| {
            if let StorageError::ChainBroken { key } = err {
                warn!("[fat] ⚠️ Chain of '{}' broken at block {}", name, key);
            }
        })?;

        Ok(OpenedFile { record, content })
    }

    fn stat(&self, name: &str) -> Result<FileRecord, StorageError> {
        self.records.load(name)
    }

    fn modify(&mut self, name: &str, new_content: &str) -> Result<FileRecord, StorageError> {
        let mut record = self.load_live(name)?;

        // Destroy the old chain in full before building its replacement
        let removed = self.blocks.delete_chain(record.head_ref.as_ref()).inspect_err(|err| {
            warn!("[fat] ⚠️ Deleting old chain of '{}' failed: {}", name, err);
        })?;

        let payloads = split(new_content);
        let head = self.blocks.save_chain(&payloads)?;

        record.replace_chain(head, char_count(new_content), self.time_source.now());
        self.records.save(&record).inspect_err(|err| {
            warn!(
                "[fat] ⚠️ Record write for '{}' failed after chain rebuild: {}",
                name, err
            );
        })?;

        info!(
            "[fat] ✏️ Modified '{}' ({} blocks removed, {} written, {} chars)",
            name,
            removed,
            payloads.len(),
            record.total_size
        );

        Ok(record)
    }

    fn delete(&mut self, name: &str) -> Result<FileRecord, StorageError> {
        let mut record = self.records.load(name)?;

        record.move_to_trash(self.time_source.now());
        self.records.save(&record)?;

        info!("[fat] 🗑️ Moved '{}' to the trash", name);
        Ok(record)
    }

    fn recover(&mut self, name: &str) -> Result<FileRecord, StorageError> {
        let mut record = self.records.load(name)?;
        if !record.trashed {
            return Err(StorageError::NotInTrash {
                name: name.to_string(),
            });
        }

        record.restore();
        self.records.save(&record)?;

        info!("[fat] ♻️ Recovered '{}' from the trash", name);
        Ok(record)
    }

    fn check_integrity(&self) -> Result<IntegrityReport, StorageError> {
        self.scan_integrity()
    }
}
