//! # File Storage Service
//!
//! The storage engine implementing `FileStorageApi`.
//!
//! ## Architecture
//!
//! This service:
//! 1. Composes ChainCodec, BlockStore and FileRecordStore
//! 2. Enforces the trash state machine and the chain invariants
//! 3. Uses dependency injection for every backend, clock and key source
//!
//! ## Operation sequencing
//!
//! | Operation | Sequence |
//! |-----------|----------|
//! | create | split → save chain (tail-first) → save record |
//! | open | load record → traverse chain |
//! | modify | load record → delete old chain → split → save chain → save record |
//! | delete / recover | load record → toggle trash → save record |

mod api;
mod builder;
mod helpers;
mod integrity;

use crate::ports::outbound::{KeyGenerator, KeyValueStore, RecordSerializer, TimeSource};
use crate::stores::{BlockStore, FileRecordStore};

pub use builder::DynFileStorageService;

/// The FAT chain storage engine.
///
/// Constructed once by its driver and passed around by ownership or
/// reference; there is no global instance.
pub struct FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    /// Block persistence.
    pub(crate) blocks: BlockStore<KV, KG, RS>,
    /// File record persistence.
    pub(crate) records: FileRecordStore<KV, RS>,
    /// Time source for record timestamps.
    pub(crate) time_source: TS,
}

/// Dependencies for FileStorageService
pub struct FileStorageDependencies<KV, TS, KG, RS> {
    /// Backend for blocks.
    pub block_kv: KV,
    /// Backend for file records.
    pub record_kv: KV,
    pub time_source: TS,
    pub key_gen: KG,
    pub serializer: RS,
}

impl<KV, TS, KG, RS> FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer + Clone,
{
    /// Create a new storage engine with the given dependencies.
    pub fn new(deps: FileStorageDependencies<KV, TS, KG, RS>) -> Self {
        Self {
            blocks: BlockStore::new(deps.block_kv, deps.key_gen, deps.serializer.clone()),
            records: FileRecordStore::new(deps.record_kv, deps.serializer),
            time_source: deps.time_source,
        }
    }
}

impl<KV, TS, KG, RS> FileStorageService<KV, TS, KG, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    pub fn block_store(&self) -> &BlockStore<KV, KG, RS> {
        &self.blocks
    }

    pub fn block_store_mut(&mut self) -> &mut BlockStore<KV, KG, RS> {
        &mut self.blocks
    }

    pub fn record_store(&self) -> &FileRecordStore<KV, RS> {
        &self.records
    }

    pub fn record_store_mut(&mut self) -> &mut FileRecordStore<KV, RS> {
        &mut self.records
    }
}
