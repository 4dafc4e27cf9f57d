//! # File Backend Persistence
//!
//! Every mutation is flushed to `records.kv` / `blocks.kv`, so a fresh
//! engine over the same directory sees exactly what the previous one left.

#[cfg(test)]
mod tests {
    use std::fs;

    use fat_storage::{
        BackendKind, DynFileStorageService, FileStorageApi, KeyValueStore, StorageConfig,
        StorageError,
    };
    use tempfile::TempDir;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn file_config(dir: &TempDir) -> StorageConfig {
        StorageConfig::new()
            .with_backend(BackendKind::File)
            .with_data_dir(dir.path().join("store"))
    }

    fn open_engine(config: &StorageConfig) -> DynFileStorageService {
        DynFileStorageService::from_config(config).unwrap()
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_content_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);
        let content = "hello world this is twenty-six".repeat(4);

        {
            let mut engine = open_engine(&config);
            engine.create("note", &content).unwrap();
            engine.create("empty", "").unwrap();
        }

        let engine = open_engine(&config);
        assert_eq!(engine.open("note").unwrap().content, content);
        assert_eq!(engine.open("empty").unwrap().content, "");
        assert_eq!(engine.list().unwrap().len(), 2);
    }

    #[test]
    fn test_creates_both_store_files() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);

        let mut engine = open_engine(&config);
        engine.create("note", "abc").unwrap();

        assert!(config.records_path().exists());
        assert!(config.blocks_path().exists());
    }

    #[test]
    fn test_trash_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);

        {
            let mut engine = open_engine(&config);
            engine.create("note", "soft deleted").unwrap();
            engine.delete("note").unwrap();
        }

        let mut engine = open_engine(&config);
        assert!(matches!(
            engine.open("note"),
            Err(StorageError::InTrash { .. })
        ));
        assert_eq!(engine.list_trash().unwrap().len(), 1);

        engine.recover("note").unwrap();
        drop(engine);

        let engine = open_engine(&config);
        assert_eq!(engine.open("note").unwrap().content, "soft deleted");
    }

    #[test]
    fn test_modify_leaves_no_orphans_on_disk() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);

        {
            let mut engine = open_engine(&config);
            engine.create("note", &"x".repeat(100)).unwrap();
            engine.modify("note", "tiny").unwrap();
        }

        let engine = open_engine(&config);
        let report = engine.check_integrity().unwrap();
        assert!(report.is_clean());
        assert_eq!(report.blocks_scanned, 1);
        assert_eq!(engine.stat("note").unwrap().total_size, 4);
    }

    #[test]
    fn test_failed_record_write_is_not_visible() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);
        let mut engine = open_engine(&config);
        engine.create("note", "still live").unwrap();

        // A non-empty directory where the snapshot lives makes the rename fail
        let records = config.records_path();
        fs::remove_file(&records).unwrap();
        fs::create_dir(&records).unwrap();
        fs::write(records.join("occupied"), b"x").unwrap();

        assert!(matches!(
            engine.delete("note"),
            Err(StorageError::Io { .. })
        ));

        let record = engine.stat("note").unwrap();
        assert!(!record.trashed);
        assert!(record.deleted_at.is_none());
        assert_eq!(engine.open("note").unwrap().content, "still live");
    }

    #[test]
    fn test_corrupt_store_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir);
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.records_path(), b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();

        let result = DynFileStorageService::from_config(&config);

        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_records_are_readable_json() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir).with_pretty_records(false);

        let mut engine = open_engine(&config);
        let record = engine.create("note", "abc").unwrap();

        let json = engine
            .record_store()
            .backend()
            .get(b"f:note")
            .unwrap()
            .unwrap();
        let text = String::from_utf8(json).unwrap();

        assert!(text.contains("\"headRef\""));
        assert!(text.contains("\"totalSize\":3"));
        assert!(text.contains(record.head_ref.unwrap().as_str()));
    }
}
