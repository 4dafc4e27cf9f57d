//! # Domain Errors
//!
//! Error types for the FAT chain storage engine.
//!
//! ## Design Principles
//!
//! - Each error carries the file name or block key it concerns
//! - Backend failures pass through unchanged as `Io`
//! - No panics in domain logic (use Result instead)

use thiserror::Error;

use super::entities::BlockRef;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No file record exists under this name.
    #[error("File not found: {name}")]
    FileNotFound { name: String },

    /// A file record already exists under this name.
    #[error("File already exists: {name}")]
    AlreadyExists { name: String },

    /// The file is in the trash and cannot be opened or modified.
    #[error("File is in the trash: {name}")]
    InTrash { name: String },

    /// Recover was requested for a file that is not in the trash.
    #[error("File is not in the trash: {name}")]
    NotInTrash { name: String },

    /// A block key did not resolve to a persisted block.
    #[error("Block not found: {key}")]
    BlockNotFound { key: BlockRef },

    /// A chain references a block that cannot be read, or revisits a block.
    #[error("Chain broken at block {key}")]
    ChainBroken { key: BlockRef },

    /// Backend I/O failure passed through from the key-value store.
    #[error("I/O failure: {message}")]
    Io { message: String },

    /// The configured backend is not compiled into this build.
    #[error("Backend unavailable: {backend} (rebuild with the `{backend}` feature)")]
    BackendUnavailable { backend: String },

    /// A persisted record could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StorageError {
    /// True for lookup misses (`FileNotFound`, `BlockNotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::FileNotFound { .. } | StorageError::BlockNotFound { .. }
        )
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl From<KVStoreError> for StorageError {
    fn from(err: KVStoreError) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

/// Serialization errors.
#[derive(Debug, Clone, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

impl From<SerializationError> for StorageError {
    fn from(err: SerializationError) -> Self {
        StorageError::Serialization {
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::InTrash {
            name: "note".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("trash"));
        assert!(msg.contains("note"));
    }

    #[test]
    fn test_kv_error_conversion() {
        let kv_err = KVStoreError::IOError {
            message: "disk failure".to_string(),
        };
        let storage_err: StorageError = kv_err.into();

        match storage_err {
            StorageError::Io { message } => {
                assert!(message.contains("disk failure"));
            }
            _ => panic!("Expected Io"),
        }
    }

    #[test]
    fn test_not_found_classification() {
        assert!(StorageError::FileNotFound {
            name: "a".to_string()
        }
        .is_not_found());
        assert!(!StorageError::ChainBroken {
            key: BlockRef::new("k")
        }
        .is_not_found());
    }
}
