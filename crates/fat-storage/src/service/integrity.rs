//! # Integrity Scan
//!
//! Read-only cross-check of file records against the block store.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use super::*;
use crate::domain::chain::for_each_block;
use crate::domain::entities::BlockRef;
use crate::domain::errors::StorageError;
use crate::domain::integrity::{BrokenChain, InconsistentRecord, IntegrityReport};

impl<KV, TS, KG, RS> FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    pub(crate) fn scan_integrity(&self) -> Result<IntegrityReport, StorageError> {
        let entries = self.records.scan()?;
        let stored = self.blocks.all_refs()?;

        let mut report = IntegrityReport {
            records_scanned: entries.len(),
            blocks_scanned: stored.len(),
            ..IntegrityReport::default()
        };

        // block -> number of records whose chain passes through it
        let mut owners: BTreeMap<BlockRef, usize> = BTreeMap::new();

        for (name, decoded) in entries {
            let record = match decoded {
                Ok(record) => record,
                Err(err) => {
                    report.inconsistent_records.push(InconsistentRecord {
                        name,
                        reason: format!("record cannot be decoded: {}", err),
                    });
                    continue;
                }
            };

            if !record.is_trash_consistent() {
                report.inconsistent_records.push(InconsistentRecord {
                    name: record.name.clone(),
                    reason: "trashed flag and deletedAt disagree".to_string(),
                });
            }

            let mut chars: u64 = 0;
            // Key the walk will read next; names the block on a decode failure
            let mut pending = record.head_ref.clone();
            let walked = for_each_block(record.head_ref.as_ref(), &self.blocks, |key, block| {
                *owners.entry(key.clone()).or_insert(0) += 1;
                chars += block.payload.chars().count() as u64;
                pending = block.next_ref;
            });

            match walked {
                Ok(()) if chars != record.total_size => {
                    report.inconsistent_records.push(InconsistentRecord {
                        name: record.name.clone(),
                        reason: format!(
                            "totalSize is {} but the chain holds {} chars",
                            record.total_size, chars
                        ),
                    });
                }
                Ok(()) => {}
                Err(StorageError::ChainBroken { key }) => {
                    report.broken_chains.push(BrokenChain {
                        name: record.name.clone(),
                        key,
                        reason: "block missing or revisited".to_string(),
                    });
                }
                Err(StorageError::Serialization { message }) => {
                    if let Some(key) = pending {
                        report.broken_chains.push(BrokenChain {
                            name: record.name.clone(),
                            key,
                            reason: format!("block cannot be decoded: {}", message),
                        });
                    }
                }
                Err(other) => return Err(other),
            }
        }

        report.aliased_blocks = owners
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(key, _)| key.clone())
            .collect();

        let reachable: HashSet<&BlockRef> = owners.keys().collect();
        report.orphaned_blocks = stored
            .iter()
            .filter(|key| !reachable.contains(key))
            .cloned()
            .collect();

        if report.is_clean() {
            debug!(
                "[fat] integrity scan clean ({} records, {} blocks)",
                report.records_scanned, report.blocks_scanned
            );
        } else {
            warn!(
                "[fat] ⚠️ Integrity scan found {} issue(s)",
                report.issue_count()
            );
        }

        Ok(report)
    }
}
