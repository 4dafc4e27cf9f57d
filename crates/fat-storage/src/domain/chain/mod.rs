//! # Chain Codec
//!
//! Pure chain logic: splitting content into bounded block payloads and
//! walking a chain of block references back into content.
//!
//! ## Chain shape
//!
//! Content of `n > 0` characters becomes `ceil(n / BLOCK_CAPACITY)` payloads.
//! Every payload but the last holds exactly `BLOCK_CAPACITY` characters.
//! Empty content becomes no payloads at all, so an empty file has no head.

mod codec;


pub use codec::{for_each_block, split, traverse, walk, BlockReader, BLOCK_CAPACITY};
