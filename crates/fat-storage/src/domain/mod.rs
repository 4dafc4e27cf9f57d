//! # Domain Layer
//!
//! Pure domain logic for the FAT chain storage engine.
//! Nothing here touches a backend directly; persistence goes through the
//! ports layer.
//!
//! ## Modules
//!
//! - `entities` - FileRecord, Block and the views returned by the engine
//! - `chain` - ChainCodec: splitting content and walking chains
//! - `config` - Engine configuration and backend selection
//! - `errors` - Domain error types
//! - `integrity` - Report produced by the read-only integrity scan
//! - `keys` - Key namespaces for the key-value backends

pub mod chain;
pub mod config;
pub mod entities;
pub mod errors;
pub mod integrity;
pub mod keys;
