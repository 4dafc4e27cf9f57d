//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` trait.

mod file;
mod memory;
#[cfg(feature = "rocksdb")]
mod rocks;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;

#[cfg(feature = "rocksdb")]
pub use rocks::{RocksDbConfig, RocksDbStore};
