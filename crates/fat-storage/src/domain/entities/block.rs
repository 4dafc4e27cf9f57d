//! # Block
//!
//! One bounded fragment of a file's content plus the key of the next
//! fragment. Serialized as `{ "payload": ..., "nextRef": ... }`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque key identifying one persisted block.
///
/// Keys are minted by a `KeyGenerator` and are only stable for the lifetime
/// of the chain that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRef(String);

impl BlockRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A block stored in the block store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// At most `BLOCK_CAPACITY` characters of content.
    pub payload: String,
    /// Key of the following block; `None` on the chain's last block.
    pub next_ref: Option<BlockRef>,
}

impl Block {
    pub fn new(payload: impl Into<String>, next_ref: Option<BlockRef>) -> Self {
        Self {
            payload: payload.into(),
            next_ref,
        }
    }

    /// True for the last block of a chain.
    pub fn is_tail(&self) -> bool {
        self.next_ref.is_none()
    }
}
