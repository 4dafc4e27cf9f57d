//! # Adapters Module
//!
//! Adapter implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: `KeyValueStore` backends (memory, snapshot file, RocksDB)
//! - `serializer`: JSON `RecordSerializer`
//! - `infra`: system clock and UUID key generator

pub mod infra;
pub mod serializer;
pub mod storage;

pub use infra::{SystemTimeSource, UuidKeyGenerator};
pub use serializer::JsonRecordSerializer;
pub use storage::{FileBackedKVStore, InMemoryKVStore};

#[cfg(feature = "rocksdb")]
pub use storage::{RocksDbConfig, RocksDbStore};
