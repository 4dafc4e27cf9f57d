use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{KeyValueStore, ScanResult};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot-file key-value store.
///
/// Keeps the whole map in memory and rewrites one bincode-encoded file on
/// every mutation (temp file, fsync, rename). A crash between two
/// mutations loses nothing already acknowledged; a crash inside a
/// multi-key engine operation can still leave it half done. A mutation
/// whose file write fails is undone in memory before the error returns.
///
/// Each put re-encodes and fsyncs the whole snapshot, so writing a chain
/// of `n` blocks costs `n` full rewrites. Large files belong on the
/// `rocksdb` backend.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, creating an empty one if the file is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_from_file(&path)?;

        if data.is_empty() {
            tracing::info!("[fat] 📁 No existing entries at {}", path.display());
        } else {
            tracing::info!("[fat] 💾 Loaded {} keys from {}", data.len(), path.display());
        }

        Ok(Self { data, path })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(KVStoreError::IOError {
                    message: format!("{}: {}", path.display(), e),
                })
            }
        };

        if bytes.is_empty() {
            return Ok(BTreeMap::new());
        }

        bincode::deserialize(&bytes).map_err(|e| KVStoreError::CorruptionError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        let io_err = |e: std::io::Error| KVStoreError::IOError {
            message: format!("{}: {}", self.path.display(), e),
        };

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let bytes = bincode::serialize(&self.data).map_err(|e| KVStoreError::IOError {
            message: format!("encoding {}: {}", self.path.display(), e),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;

        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;

        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let previous = self.data.insert(key.to_vec(), value.to_vec());

        // A write that did not reach disk must not stay visible in memory
        if let Err(err) = self.save_to_file() {
            match previous {
                Some(old) => self.data.insert(key.to_vec(), old),
                None => self.data.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let Some(previous) = self.data.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.save_to_file() {
            self.data.insert(key.to_vec(), previous);
            return Err(err);
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let results: Vec<_> = self
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileBackedKVStore::open(dir.path().join("none.kv")).unwrap();

        assert!(!store.exists(b"anything").unwrap());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.kv");

        {
            let mut store = FileBackedKVStore::open(&path).unwrap();
            store.put(b"f:a", b"1").unwrap();
            store.put(b"f:b", b"2").unwrap();
            store.put(b"b:x", b"3").unwrap();
            store.delete(b"f:b").unwrap();
        }

        let store = FileBackedKVStore::open(&path).unwrap();
        assert_eq!(store.get(b"f:a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.get(b"f:b").unwrap(), None);
        assert_eq!(store.prefix_scan(b"f:").unwrap().len(), 1);
        assert_eq!(store.prefix_scan(b"b:").unwrap().len(), 1);
    }

    /// A non-empty directory at the snapshot path makes every rename fail.
    fn block_snapshot_path(path: &Path) {
        std::fs::remove_file(path).unwrap();
        std::fs::create_dir(path).unwrap();
        std::fs::write(path.join("occupied"), b"x").unwrap();
    }

    #[test]
    fn test_failed_put_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.kv");
        let mut store = FileBackedKVStore::open(&path).unwrap();
        store.put(b"f:a", b"old").unwrap();
        block_snapshot_path(&path);

        assert!(matches!(
            store.put(b"f:a", b"new"),
            Err(KVStoreError::IOError { .. })
        ));
        assert!(store.put(b"f:b", b"fresh").is_err());

        assert_eq!(store.get(b"f:a").unwrap(), Some(b"old".to_vec()));
        assert!(!store.exists(b"f:b").unwrap());
    }

    #[test]
    fn test_failed_delete_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.kv");
        let mut store = FileBackedKVStore::open(&path).unwrap();
        store.put(b"f:a", b"kept").unwrap();
        block_snapshot_path(&path);

        assert!(store.delete(b"f:a").is_err());

        assert_eq!(store.get(b"f:a").unwrap(), Some(b"kept".to_vec()));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.kv");
        std::fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();

        let result = FileBackedKVStore::open(&path);
        assert!(matches!(result, Err(KVStoreError::CorruptionError { .. })));
    }
}
