//! # Storage Configuration
//!
//! Selects the backend and where it keeps its data. Block capacity is fixed
//! (`BLOCK_CAPACITY`) and deliberately not configurable.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Backend holding blocks and file records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Process-local maps; nothing survives the process.
    Memory,
    /// One snapshot file per store under `data_dir`.
    #[default]
    File,
    /// Embedded RocksDB under `data_dir` (requires the `rocksdb` feature).
    RocksDb,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(BackendKind::Memory),
            "file" => Ok(BackendKind::File),
            "rocksdb" | "rocks" => Ok(BackendKind::RocksDb),
            other => Err(format!("unknown backend '{other}' (expected memory, file or rocksdb)")),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Memory => "memory",
            BackendKind::File => "file",
            BackendKind::RocksDb => "rocksdb",
        };
        f.write_str(name)
    }
}

/// Configuration for the storage engine.
///
/// All values have defaults suitable for local use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend selection (default: `File`).
    pub backend: BackendKind,

    /// Directory holding the backend's files (default: `./fat-data`).
    pub data_dir: PathBuf,

    /// Pretty-print JSON records (default: true).
    pub pretty_records: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            data_dir: PathBuf::from("./fat-data"),
            pretty_records: true,
        }
    }
}

impl StorageConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Enable or disable pretty-printed JSON records.
    pub fn with_pretty_records(mut self, pretty: bool) -> Self {
        self.pretty_records = pretty;
        self
    }

    /// Path of the file-backend store holding file records.
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join("records.kv")
    }

    /// Path of the file-backend store holding blocks.
    pub fn blocks_path(&self) -> PathBuf {
        self.data_dir.join("blocks.kv")
    }
}
