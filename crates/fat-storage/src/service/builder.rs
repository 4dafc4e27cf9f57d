//! # Service Construction
//!
//! Wires concrete adapters into a `FileStorageService` from a
//! `StorageConfig`.

use std::fs;

use tracing::info;

use super::*;
use crate::adapters::{
    FileBackedKVStore, InMemoryKVStore, JsonRecordSerializer, SystemTimeSource, UuidKeyGenerator,
};
use crate::domain::config::{BackendKind, StorageConfig};
use crate::domain::errors::StorageError;

/// Engine whose backend is chosen at runtime.
pub type DynFileStorageService =
    FileStorageService<Box<dyn KeyValueStore>, SystemTimeSource, UuidKeyGenerator, JsonRecordSerializer>;

impl FileStorageService<InMemoryKVStore, SystemTimeSource, UuidKeyGenerator, JsonRecordSerializer> {
    /// Volatile engine backed by two in-memory maps.
    pub fn in_memory() -> Self {
        Self::new(FileStorageDependencies {
            block_kv: InMemoryKVStore::new(),
            record_kv: InMemoryKVStore::new(),
            time_source: SystemTimeSource,
            key_gen: UuidKeyGenerator,
            serializer: JsonRecordSerializer::compact(),
        })
    }
}

impl DynFileStorageService {
    /// Build an engine for the backend named in `config`.
    ///
    /// Fails with `BackendUnavailable` when the backend was not compiled in.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let serializer = if config.pretty_records {
            JsonRecordSerializer::pretty()
        } else {
            JsonRecordSerializer::compact()
        };

        let (block_kv, record_kv) = open_backends(config)?;

        info!(
            "[fat] 🚀 Storage engine ready (backend: {}, data dir: {})",
            config.backend,
            config.data_dir.display()
        );

        Ok(Self::new(FileStorageDependencies {
            block_kv,
            record_kv,
            time_source: SystemTimeSource,
            key_gen: UuidKeyGenerator,
            serializer,
        }))
    }
}

type BackendPair = (Box<dyn KeyValueStore>, Box<dyn KeyValueStore>);

fn open_backends(config: &StorageConfig) -> Result<BackendPair, StorageError> {
    match config.backend {
        BackendKind::Memory => {
            let blocks: Box<dyn KeyValueStore> = Box::new(InMemoryKVStore::new());
            let records: Box<dyn KeyValueStore> = Box::new(InMemoryKVStore::new());
            Ok((blocks, records))
        }
        BackendKind::File => {
            ensure_data_dir(config)?;
            let blocks: Box<dyn KeyValueStore> =
                Box::new(FileBackedKVStore::open(config.blocks_path())?);
            let records: Box<dyn KeyValueStore> =
                Box::new(FileBackedKVStore::open(config.records_path())?);
            Ok((blocks, records))
        }
        BackendKind::RocksDb => open_rocksdb(config),
    }
}

fn ensure_data_dir(config: &StorageConfig) -> Result<(), StorageError> {
    fs::create_dir_all(&config.data_dir).map_err(|e| StorageError::Io {
        message: format!("{}: {}", config.data_dir.display(), e),
    })
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &StorageConfig) -> Result<BackendPair, StorageError> {
    use crate::adapters::{RocksDbConfig, RocksDbStore};

    ensure_data_dir(config)?;
    let blocks: Box<dyn KeyValueStore> =
        Box::new(RocksDbStore::open(RocksDbConfig::new(config.data_dir.join("blocks")))?);
    let records: Box<dyn KeyValueStore> =
        Box::new(RocksDbStore::open(RocksDbConfig::new(config.data_dir.join("records")))?);
    Ok((blocks, records))
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(_config: &StorageConfig) -> Result<BackendPair, StorageError> {
    Err(StorageError::BackendUnavailable {
        backend: BackendKind::RocksDb.to_string(),
    })
}
