//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the storage engine. Adapters live in
//! `crate::adapters`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::{BlockRef, Timestamp};
use crate::domain::errors::{KVStoreError, SerializationError};

/// Result type for prefix scans.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for key-value persistence.
///
/// Block and file record stores each own one instance. No operation spans
/// more than one key.
///
/// Production: `FileBackedKVStore`, `RocksDbStore` (feature `rocksdb`)
/// Testing: `InMemoryKVStore`
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair, replacing any previous value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// All entries whose key starts with `prefix`, in no particular order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        (**self).put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        (**self).exists(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        (**self).prefix_scan(prefix)
    }
}

/// Encoding of the persisted record shapes.
///
/// Implementations must be self-describing: field names are part of the
/// stored contract.
pub trait RecordSerializer: Send + Sync {
    /// Encode a record.
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Decode a record.
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, SerializationError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> Timestamp;
}

/// Mints block keys.
///
/// Every call must return a key never returned before; keys of destroyed
/// chains are not reused.
pub trait KeyGenerator: Send + Sync {
    fn next_key(&self) -> BlockRef;
}
