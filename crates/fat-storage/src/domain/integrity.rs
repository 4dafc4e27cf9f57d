//! # Integrity Report
//!
//! Findings of the read-only integrity scan. The scan never repairs
//! anything; it only reports where the chain invariants do not hold.

use super::entities::BlockRef;

/// A record whose chain cannot be fully walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenChain {
    pub name: String,
    /// Key at which the walk stopped.
    pub key: BlockRef,
    /// Why the block could not be read.
    pub reason: String,
}

/// A record whose metadata disagrees with itself or with its chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentRecord {
    pub name: String,
    pub reason: String,
}

/// Result of `FileStorageApi::check_integrity`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of file records scanned.
    pub records_scanned: usize,
    /// Number of persisted blocks found in the block store.
    pub blocks_scanned: usize,
    pub broken_chains: Vec<BrokenChain>,
    /// Blocks reachable from more than one record.
    pub aliased_blocks: Vec<BlockRef>,
    /// Blocks not reachable from any record.
    pub orphaned_blocks: Vec<BlockRef>,
    pub inconsistent_records: Vec<InconsistentRecord>,
}

impl IntegrityReport {
    /// True when no problem was found.
    pub fn is_clean(&self) -> bool {
        self.broken_chains.is_empty()
            && self.aliased_blocks.is_empty()
            && self.orphaned_blocks.is_empty()
            && self.inconsistent_records.is_empty()
    }

    /// Total number of findings.
    pub fn issue_count(&self) -> usize {
        self.broken_chains.len()
            + self.aliased_blocks.len()
            + self.orphaned_blocks.len()
            + self.inconsistent_records.len()
    }
}
