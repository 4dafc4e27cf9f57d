//! # Stores
//!
//! Thin typed stores over a `KeyValueStore` backend.
//!
//! - `BlockStore` - blocks keyed by generated reference; knows nothing of files
//! - `FileRecordStore` - file records keyed by name; knows nothing of content

mod block_store;
mod record_store;


pub use block_store::BlockStore;
pub use record_store::FileRecordStore;
