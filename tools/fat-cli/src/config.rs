//! Configuration loading: defaults, then environment, then flags.

use fat_storage::{BackendKind, StorageConfig};
use tracing::warn;

use crate::cli::Args;

/// Build the storage configuration for this invocation.
pub fn load_config(args: &Args) -> StorageConfig {
    let config = load_config_from(|key| std::env::var(key).ok());
    apply_flags(config, args)
}

/// Defaults overridden by whatever `lookup` returns for the `FAT_*` keys.
pub fn load_config_from<F>(lookup: F) -> StorageConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = StorageConfig::default();

    if let Some(dir) = lookup("FAT_DATA_DIR") {
        config.data_dir = dir.into();
    }

    if let Some(backend) = lookup("FAT_BACKEND") {
        match backend.parse::<BackendKind>() {
            Ok(kind) => config.backend = kind,
            Err(e) => warn!("[fat] ignoring FAT_BACKEND: {}", e),
        }
    }

    if let Some(pretty) = lookup("FAT_PRETTY") {
        match pretty.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.pretty_records = true,
            "0" | "false" | "no" => config.pretty_records = false,
            other => warn!("[fat] ignoring FAT_PRETTY={}", other),
        }
    }

    config
}

fn apply_flags(mut config: StorageConfig, args: &Args) -> StorageConfig {
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if args.memory {
        config.backend = BackendKind::Memory;
    }
    config
}
