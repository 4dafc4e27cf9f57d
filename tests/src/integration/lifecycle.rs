//! # Engine Lifecycle
//!
//! End-to-end runs through an engine built from configuration, plus the
//! deterministic scenarios that need a controllable clock.

#[cfg(test)]
mod tests {
    use fat_storage::test_utils::test_service;
    use fat_storage::{
        walk, BackendKind, DynFileStorageService, FileStorageApi, StorageConfig, StorageError,
        BLOCK_CAPACITY,
    };

    fn memory_engine() -> DynFileStorageService {
        let config = StorageConfig::new().with_backend(BackendKind::Memory);
        DynFileStorageService::from_config(&config).unwrap()
    }

    #[test]
    fn test_full_lifecycle() {
        let mut engine = memory_engine();

        engine
            .create("note", "hello world this is twenty-six")
            .unwrap();
        assert_eq!(engine.list().unwrap()[0].name, "note");

        engine.modify("note", "rewritten").unwrap();
        assert_eq!(engine.open("note").unwrap().content, "rewritten");

        engine.delete("note").unwrap();
        assert!(engine.list().unwrap().is_empty());
        assert!(matches!(
            engine.open("note"),
            Err(StorageError::InTrash { .. })
        ));

        engine.recover("note").unwrap();
        assert_eq!(engine.open("note").unwrap().content, "rewritten");
        assert!(engine.check_integrity().unwrap().is_clean());
    }

    #[test]
    fn test_twenty_six_char_scenario() {
        let mut engine = memory_engine();
        let content = "hello world this is twenty-six";

        let record = engine.create("note", content).unwrap();
        let keys = walk(record.head_ref.as_ref(), engine.block_store()).unwrap();

        assert_eq!(keys.len(), content.chars().count().div_ceil(BLOCK_CAPACITY));
        let first = engine.block_store().read(&keys[0]).unwrap();
        let second = engine.block_store().read(&keys[1]).unwrap();
        assert_eq!(first.payload, "hello world this is ");
        assert_eq!(second.payload, "twenty-six");
        assert!(second.is_tail());
    }

    #[test]
    fn test_many_files_stay_independent() {
        let mut engine = memory_engine();

        for i in 0..25 {
            engine
                .create(&format!("file-{:02}", i), &"z".repeat(i * 7))
                .unwrap();
        }
        for i in (0..25).step_by(3) {
            engine
                .modify(&format!("file-{:02}", i), &format!("changed {}", i))
                .unwrap();
        }

        for i in 0..25 {
            let expected = if i % 3 == 0 {
                format!("changed {}", i)
            } else {
                "z".repeat(i * 7)
            };
            assert_eq!(
                engine.open(&format!("file-{:02}", i)).unwrap().content,
                expected
            );
        }
        assert!(engine.check_integrity().unwrap().is_clean());
    }

    #[test]
    fn test_deleted_at_refreshes_on_repeat_delete() {
        let (mut engine, clock) = test_service(1_700_000_000);
        engine.create("note", "x").unwrap();

        let first = engine.delete("note").unwrap();
        clock.advance(3600);
        let second = engine.delete("note").unwrap();

        assert!(second.deleted_at > first.deleted_at);
        assert_eq!(engine.list_trash().unwrap().len(), 1);
    }
}
