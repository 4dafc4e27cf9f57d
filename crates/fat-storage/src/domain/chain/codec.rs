use std::collections::HashSet;

use crate::domain::entities::{Block, BlockRef};
use crate::domain::errors::StorageError;

/// Maximum number of characters held by one block.
pub const BLOCK_CAPACITY: usize = 20;

/// Read access to persisted blocks, as needed by chain traversal.
pub trait BlockReader {
    /// Read one block. Fails with `BlockNotFound` if `key` does not resolve.
    fn read_block(&self, key: &BlockRef) -> Result<Block, StorageError>;
}

/// Partition `content` into payloads of at most `BLOCK_CAPACITY` characters.
///
/// Characters are Unicode scalar values; a payload never ends inside a
/// multi-byte sequence.
pub fn split(content: &str) -> Vec<String> {
    let mut payloads = Vec::with_capacity(content.len().div_ceil(BLOCK_CAPACITY));
    let mut chunk = String::new();
    let mut chars_in_chunk = 0usize;

    for ch in content.chars() {
        chunk.push(ch);
        chars_in_chunk += 1;
        if chars_in_chunk == BLOCK_CAPACITY {
            payloads.push(std::mem::take(&mut chunk));
            chars_in_chunk = 0;
        }
    }

    if !chunk.is_empty() {
        payloads.push(chunk);
    }

    payloads
}

/// Rebuild content by following the chain from `head`.
///
/// Returns an empty string for `None`. A dangling or repeated reference
/// fails with `ChainBroken`; backend failures pass through unchanged.
pub fn traverse<R>(head: Option<&BlockRef>, reader: &R) -> Result<String, StorageError>
where
    R: BlockReader + ?Sized,
{
    let mut content = String::new();
    for_each_block(head, reader, |_, block| content.push_str(&block.payload))?;
    Ok(content)
}

/// Keys of every block on the chain from `head`, in chain order.
pub fn walk<R>(head: Option<&BlockRef>, reader: &R) -> Result<Vec<BlockRef>, StorageError>
where
    R: BlockReader + ?Sized,
{
    let mut keys = Vec::new();
    for_each_block(head, reader, |key, _| keys.push(key.clone()))?;
    Ok(keys)
}

/// Call `on_block` for each block on the chain from `head`, in order.
///
/// Blocks visited before a `ChainBroken` failure have already been passed
/// to `on_block`.
pub fn for_each_block<R, F>(
    head: Option<&BlockRef>,
    reader: &R,
    mut on_block: F,
) -> Result<(), StorageError>
where
    R: BlockReader + ?Sized,
    F: FnMut(&BlockRef, Block),
{
    let mut seen = HashSet::new();
    let mut current = head.cloned();

    while let Some(key) = current {
        // A revisited key means the chain loops back on itself
        if !seen.insert(key.clone()) {
            return Err(StorageError::ChainBroken { key });
        }

        let block = reader.read_block(&key).map_err(|err| match err {
            StorageError::BlockNotFound { key } => StorageError::ChainBroken { key },
            other => other,
        })?;

        current = block.next_ref.clone();
        on_block(&key, block);
    }

    Ok(())
}
