use crate::domain::entities::FileRecord;
use crate::domain::errors::StorageError;
use crate::domain::keys::KeyPrefix;
use crate::ports::outbound::{KeyValueStore, RecordSerializer};

/// Persists file records keyed by name.
///
/// Every call is a full read or full replace of one record.
pub struct FileRecordStore<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    kv_store: KV,
    serializer: RS,
}

impl<KV, RS> FileRecordStore<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    pub fn new(kv_store: KV, serializer: RS) -> Self {
        Self {
            kv_store,
            serializer,
        }
    }

    /// Write `record`, replacing any record with the same name.
    pub fn save(&mut self, record: &FileRecord) -> Result<(), StorageError> {
        let data = self.serializer.serialize(record)?;
        self.kv_store.put(&KeyPrefix::file_key(&record.name), &data)?;
        Ok(())
    }

    /// Load the record for `name`. Fails with `FileNotFound` if absent.
    pub fn load(&self, name: &str) -> Result<FileRecord, StorageError> {
        let data = self
            .kv_store
            .get(&KeyPrefix::file_key(name))?
            .ok_or_else(|| StorageError::FileNotFound {
                name: name.to_string(),
            })?;

        Ok(self.serializer.deserialize(&data)?)
    }

    /// Check if a record exists for `name`.
    pub fn exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.kv_store.exists(&KeyPrefix::file_key(name))?)
    }

    /// Every record, in backend order. Callers needing a stable order sort.
    pub fn list_all(&self) -> Result<Vec<FileRecord>, StorageError> {
        self.kv_store
            .prefix_scan(KeyPrefix::File.as_bytes())?
            .iter()
            .map(|(_, data)| self.serializer.deserialize(data).map_err(StorageError::from))
            .collect()
    }

    /// Every stored name with its decode result, so one corrupt record
    /// does not hide the others.
    pub fn scan(&self) -> Result<Vec<(String, Result<FileRecord, StorageError>)>, StorageError> {
        let entries = self.kv_store.prefix_scan(KeyPrefix::File.as_bytes())?;

        Ok(entries
            .iter()
            .map(|(key, data)| {
                let suffix = key.get(KeyPrefix::File.as_bytes().len()..).unwrap_or_default();
                let name = String::from_utf8_lossy(suffix).into_owned();
                let decoded = self
                    .serializer
                    .deserialize(data)
                    .map_err(StorageError::from);
                (name, decoded)
            })
            .collect())
    }

    pub fn backend(&self) -> &KV {
        &self.kv_store
    }

    pub fn backend_mut(&mut self) -> &mut KV {
        &mut self.kv_store
    }
}
