//! # Test Utilities
//!
//! Deterministic clock and key generator plus a fault-injecting store,
//! available to unit tests and, with the `test-utils` feature, to other
//! crates.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::adapters::{InMemoryKVStore, JsonRecordSerializer};
use crate::domain::entities::{BlockRef, Timestamp};
use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{KeyGenerator, KeyValueStore, ScanResult, TimeSource};
use crate::service::{FileStorageDependencies, FileStorageService};

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    secs: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(secs: i64) -> Self {
        Self {
            secs: Arc::new(AtomicI64::new(secs)),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, secs: i64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        let secs = self.secs.load(Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
    }
}

/// Block keys `blk-000001`, `blk-000002`, ...
#[derive(Debug, Default)]
pub struct SequentialKeyGenerator {
    counter: AtomicU64,
}

impl SequentialKeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyGenerator for SequentialKeyGenerator {
    fn next_key(&self) -> BlockRef {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        BlockRef::new(format!("blk-{:06}", n))
    }
}

/// In-memory store that fails writes on demand.
#[derive(Debug, Default)]
pub struct FaultyKVStore {
    inner: InMemoryKVStore,
    /// Remaining successful puts before every put fails; `None` never fails.
    puts_left: Option<usize>,
    fail_deletes: bool,
    puts: usize,
}

impl FaultyKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `n` more puts, then fail every put.
    pub fn fail_after_puts(&mut self, n: usize) {
        self.puts_left = Some(n);
    }

    pub fn fail_deletes(&mut self, fail: bool) {
        self.fail_deletes = fail;
    }

    /// Stop injecting faults.
    pub fn heal(&mut self) {
        self.puts_left = None;
        self.fail_deletes = false;
    }

    /// Number of successful puts so far.
    pub fn put_count(&self) -> usize {
        self.puts
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn injected(op: &str) -> KVStoreError {
        KVStoreError::IOError {
            message: format!("injected {} failure", op),
        }
    }
}

impl KeyValueStore for FaultyKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        if let Some(left) = self.puts_left.as_mut() {
            if *left == 0 {
                return Err(Self::injected("put"));
            }
            *left -= 1;
        }
        self.inner.put(key, value)?;
        self.puts += 1;
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        if self.fail_deletes {
            return Err(Self::injected("delete"));
        }
        self.inner.delete(key)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.inner.exists(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        self.inner.prefix_scan(prefix)
    }
}

/// Engine over in-memory maps with a manual clock and sequential keys.
pub type TestService =
    FileStorageService<InMemoryKVStore, ManualClock, SequentialKeyGenerator, JsonRecordSerializer>;

/// Engine whose stores can be told to fail.
pub type FaultyService =
    FileStorageService<FaultyKVStore, ManualClock, SequentialKeyGenerator, JsonRecordSerializer>;

/// Build a deterministic in-memory engine. The returned clock drives it.
pub fn test_service(start_secs: i64) -> (TestService, ManualClock) {
    let clock = ManualClock::new(start_secs);
    let service = FileStorageService::new(FileStorageDependencies {
        block_kv: InMemoryKVStore::new(),
        record_kv: InMemoryKVStore::new(),
        time_source: clock.clone(),
        key_gen: SequentialKeyGenerator::new(),
        serializer: JsonRecordSerializer::compact(),
    });
    (service, clock)
}

/// Build a deterministic engine over fault-injecting stores.
pub fn faulty_service(start_secs: i64) -> (FaultyService, ManualClock) {
    let clock = ManualClock::new(start_secs);
    let service = FileStorageService::new(FileStorageDependencies {
        block_kv: FaultyKVStore::new(),
        record_kv: FaultyKVStore::new(),
        time_source: clock.clone(),
        key_gen: SequentialKeyGenerator::new(),
        serializer: JsonRecordSerializer::compact(),
    });
    (service, clock)
}
