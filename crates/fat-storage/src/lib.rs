//! # FAT Chain Storage Engine
//!
//! A File Allocation Table style storage layer on top of an ordinary
//! key-value backend. File content is split into fixed-size blocks that are
//! chained through stored reference keys; a file record tracks the chain head
//! together with size, timestamps and trash state.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!   driver ──────→│ FileStorageService (engine)  │
//!                 └──────┬──────────────┬────────┘
//!                        │              │
//!               ┌────────▼───┐    ┌─────▼───────────┐
//!               │ BlockStore │    │ FileRecordStore │
//!               └────────┬───┘    └─────┬───────────┘
//!                        │  ChainCodec  │
//!                        ▼              ▼
//!                  KeyValueStore   KeyValueStore
//!                  (b:{uuid})      (f:{name})
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Chain shape | A chain of `n > 0` characters has `ceil(n / 20)` blocks; empty content has no head |
//! | Tail-first writes | A block is only persisted once its successor's key is known |
//! | Orphan freedom | After every successful operation each block is reachable from exactly one record |
//! | Trash consistency | `trashed` is set if and only if `deleted_at` is set |
//! | Unique names | At most one record exists per file name |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, chain codec, errors, configuration, key layout
//! - `ports/` - Inbound engine API and outbound driven ports
//! - `stores/` - BlockStore and FileRecordStore over a key-value backend
//! - `adapters/` - Backends, JSON serializer, clock, key generator
//! - `service/` - The storage engine implementing `FileStorageApi`
//!
//! ## Usage
//!
//! ```ignore
//! use fat_storage::{FileStorageApi, FileStorageService};
//!
//! let mut engine = FileStorageService::in_memory();
//! engine.create("note", "hello world")?;
//! let opened = engine.open("note")?;
//! assert_eq!(opened.content, "hello world");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod stores;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types for convenience
pub use domain::chain::{for_each_block, split, traverse, walk, BlockReader, BLOCK_CAPACITY};
pub use domain::config::{BackendKind, StorageConfig};
pub use domain::entities::{
    Block, BlockRef, FileRecord, FileSummary, OpenedFile, Timestamp, TrashEntry,
};
pub use domain::errors::{KVStoreError, SerializationError, StorageError};
pub use domain::integrity::{BrokenChain, InconsistentRecord, IntegrityReport};
pub use domain::keys::KeyPrefix;
pub use ports::inbound::FileStorageApi;
pub use ports::outbound::{KeyGenerator, KeyValueStore, RecordSerializer, TimeSource};
pub use service::{DynFileStorageService, FileStorageDependencies, FileStorageService};
pub use stores::{BlockStore, FileRecordStore};
