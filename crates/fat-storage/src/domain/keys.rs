//! # Key Layout
//!
//! All backend keys are prefixed to namespace the two record shapes.

use super::entities::BlockRef;

/// Key prefixes for the key-value stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Block data: `b:{key}` -> Block
    Block,
    /// File metadata: `f:{name}` -> FileRecord
    File,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Block => b"b:",
            KeyPrefix::File => b"f:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a block key from a block reference.
    pub fn block_key(block: &BlockRef) -> Vec<u8> {
        KeyPrefix::Block.key(block.as_str().as_bytes())
    }

    /// Build a file record key from a file name.
    pub fn file_key(name: &str) -> Vec<u8> {
        KeyPrefix::File.key(name.as_bytes())
    }

    /// Strip this prefix from a full key, returning the suffix as text.
    ///
    /// Returns `None` if the key has a different prefix or is not UTF-8.
    pub fn strip<'a>(&self, key: &'a [u8]) -> Option<&'a str> {
        key.strip_prefix(self.as_bytes())
            .and_then(|suffix| std::str::from_utf8(suffix).ok())
    }
}
