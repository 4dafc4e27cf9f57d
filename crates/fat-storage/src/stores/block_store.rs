use std::collections::HashSet;

use tracing::debug;

use crate::domain::chain::BlockReader;
use crate::domain::entities::{Block, BlockRef};
use crate::domain::errors::StorageError;
use crate::domain::keys::KeyPrefix;
use crate::ports::outbound::{KeyGenerator, KeyValueStore, RecordSerializer};

/// Persists, reads and deletes individual blocks.
pub struct BlockStore<KV, KG, RS>
where
    KV: KeyValueStore,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    kv_store: KV,
    key_gen: KG,
    serializer: RS,
}

impl<KV, KG, RS> BlockStore<KV, KG, RS>
where
    KV: KeyValueStore,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    pub fn new(kv_store: KV, key_gen: KG, serializer: RS) -> Self {
        Self {
            kv_store,
            key_gen,
            serializer,
        }
    }

    /// Persist `payloads` as a new chain and return its head.
    ///
    /// All keys are minted up front; blocks are then written tail-first so
    /// no persisted block ever names a successor that does not exist yet.
    /// An empty sequence writes nothing and returns `None`.
    pub fn save_chain(&mut self, payloads: &[String]) -> Result<Option<BlockRef>, StorageError> {
        let keys: Vec<BlockRef> = payloads.iter().map(|_| self.key_gen.next_key()).collect();

        let mut next_ref: Option<BlockRef> = None;
        for (payload, key) in payloads.iter().zip(&keys).rev() {
            let block = Block::new(payload.as_str(), next_ref.take());
            let data = self.serializer.serialize(&block)?;
            self.kv_store.put(&KeyPrefix::block_key(key), &data)?;
            debug!("[fat] wrote block {} ({} chars)", key, payload.chars().count());
            next_ref = Some(key.clone());
        }

        Ok(next_ref)
    }

    /// Read one block. Fails with `BlockNotFound` if `key` does not resolve.
    pub fn read(&self, key: &BlockRef) -> Result<Block, StorageError> {
        let data = self
            .kv_store
            .get(&KeyPrefix::block_key(key))?
            .ok_or_else(|| StorageError::BlockNotFound { key: key.clone() })?;

        Ok(self.serializer.deserialize(&data)?)
    }

    /// Check if a block exists.
    pub fn contains(&self, key: &BlockRef) -> Result<bool, StorageError> {
        Ok(self.kv_store.exists(&KeyPrefix::block_key(key))?)
    }

    /// Delete every block on the chain from `head`; returns how many.
    ///
    /// A reference that does not resolve stops the walk with `ChainBroken`.
    /// Blocks deleted before that point stay deleted.
    pub fn delete_chain(&mut self, head: Option<&BlockRef>) -> Result<usize, StorageError> {
        let mut seen = HashSet::new();
        let mut current = head.cloned();
        let mut deleted = 0usize;

        while let Some(key) = current {
            if !seen.insert(key.clone()) {
                return Err(StorageError::ChainBroken { key });
            }

            let block = self.read(&key).map_err(|err| match err {
                StorageError::BlockNotFound { key } => StorageError::ChainBroken { key },
                other => other,
            })?;

            self.kv_store.delete(&KeyPrefix::block_key(&key))?;
            debug!("[fat] deleted block {}", key);
            deleted += 1;
            current = block.next_ref;
        }

        Ok(deleted)
    }

    /// Keys of every persisted block, sorted.
    pub fn all_refs(&self) -> Result<Vec<BlockRef>, StorageError> {
        let entries = self.kv_store.prefix_scan(KeyPrefix::Block.as_bytes())?;

        let mut refs: Vec<BlockRef> = entries
            .iter()
            .filter_map(|(key, _)| KeyPrefix::Block.strip(key))
            .map(BlockRef::from)
            .collect();
        refs.sort();

        Ok(refs)
    }

    pub fn backend(&self) -> &KV {
        &self.kv_store
    }

    pub fn backend_mut(&mut self) -> &mut KV {
        &mut self.kv_store
    }
}

impl<KV, KG, RS> BlockReader for BlockStore<KV, KG, RS>
where
    KV: KeyValueStore,
    KG: KeyGenerator,
    RS: RecordSerializer,
{
    fn read_block(&self, key: &BlockRef) -> Result<Block, StorageError> {
        self.read(key)
    }
}
