//! Repository Integration Tests
//!
//! Tests for TodoRepository over an in-memory key-value store.

#[cfg(test)]
mod tests {
    use crate::domain::{Todo, TodoError, TodoResult};
    use crate::repository::{KeyValueStore, MemoryStore, TodoRepository, DEFAULT_STORAGE_KEY};
    use pretty_assertions::assert_eq;

    fn setup_repo() -> TodoRepository<MemoryStore> {
        TodoRepository::new(MemoryStore::new())
    }

    fn raw_slot(repo: &TodoRepository<MemoryStore>) -> Option<String> {
        repo.store().get(repo.key()).expect("memory store never fails")
    }

    /// Reads work, every write fails (a full localStorage quota)
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> TodoResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::Storage("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> TodoResult<()> {
            Err(TodoError::Storage("quota exceeded".to_string()))
        }
    }

    /// Every read fails, writes succeed (storage access revoked mid-session)
    struct UnreadableStore(MemoryStore);

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> TodoResult<Option<String>> {
            Err(TodoError::Storage("access denied".to_string()))
        }

        fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
            self.0.set(key, value)
        }

        fn remove(&mut self, key: &str) -> TodoResult<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let repo = setup_repo();
        assert_eq!(repo.key(), DEFAULT_STORAGE_KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_add_then_load() {
        let mut repo = setup_repo();
        let todo = Todo::new(1, "milk");

        repo.add(todo.clone()).expect("Failed to add");

        assert_eq!(repo.load(), vec![todo]);
        assert_eq!(
            raw_slot(&repo).as_deref(),
            Some(r#"[{"id":1,"body":"milk","done":false}]"#)
        );
    }

    #[test]
    fn test_add_preserves_order() {
        let mut repo = setup_repo();
        repo.add(Todo::new(3, "c")).unwrap();
        repo.add(Todo::new(1, "a")).unwrap();
        repo.add(Todo::new(2, "b")).unwrap();

        let ids: Vec<_> = repo.load().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_duplicate_id_conflicts() {
        let mut repo = setup_repo();
        repo.add(Todo::new(1, "milk")).unwrap();
        let before = raw_slot(&repo);

        let err = repo.add(Todo::new(1, "eggs")).unwrap_err();
        assert!(matches!(err, TodoError::Conflict(1)));
        assert_eq!(raw_slot(&repo), before);
    }

    #[test]
    fn test_toggle_flips_done() {
        let mut repo = setup_repo();
        repo.add(Todo::new(1, "milk")).unwrap();
        repo.add(Todo::new(2, "eggs")).unwrap();

        let updated = repo.toggle(2).expect("Toggle failed");
        assert!(updated.done);
        assert_eq!(repo.load(), vec![Todo::new(1, "milk"), Todo::new(2, "eggs").toggled()]);

        repo.toggle(2).unwrap();
        assert_eq!(repo.load(), vec![Todo::new(1, "milk"), Todo::new(2, "eggs")]);
    }

    #[test]
    fn test_delete_removes_record() {
        let mut repo = setup_repo();
        repo.add(Todo::new(1, "milk")).unwrap();
        repo.add(Todo::new(2, "eggs")).unwrap();

        let removed = repo.delete(1).expect("Delete failed");
        assert_eq!(removed.body, "milk");
        assert_eq!(repo.load(), vec![Todo::new(2, "eggs")]);
    }

    #[test]
    fn test_missing_id_is_not_found_and_untouched() {
        let mut repo = setup_repo();
        repo.add(Todo::new(1, "milk")).unwrap();
        let before = raw_slot(&repo);

        assert!(repo.toggle(99).unwrap_err().is_not_found());
        assert!(repo.delete(99).unwrap_err().is_not_found());
        assert_eq!(raw_slot(&repo), before);
    }

    #[test]
    fn test_malformed_slot_reads_empty() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]", "42", ""] {
            let repo = TodoRepository::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, raw));
            assert!(repo.load().is_empty(), "expected empty for {:?}", raw);
        }
    }

    #[test]
    fn test_null_slot_reads_empty() {
        let repo = TodoRepository::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "null"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_add_over_malformed_slot_rewrites_it() {
        let mut repo = TodoRepository::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "garbage"));
        repo.add(Todo::new(1, "milk")).unwrap();
        assert_eq!(repo.load(), vec![Todo::new(1, "milk")]);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"[{"id":5,"body":"other","done":true}]"#);
        let mut repo = TodoRepository::with_key(store, "work_todos");
        assert!(repo.load().is_empty());

        repo.add(Todo::new(1, "milk")).unwrap();
        assert_eq!(repo.load().len(), 1);
        assert_eq!(repo.store().len(), 2);
    }

    #[test]
    fn test_clear_drops_slot() {
        let mut repo = setup_repo();
        repo.add(Todo::new(1, "milk")).unwrap();
        repo.clear().unwrap();
        assert_eq!(raw_slot(&repo), None);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_write_failure_surfaces_storage_error() {
        let seeded = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"[{"id":1,"body":"milk","done":false}]"#);
        let mut repo = TodoRepository::new(ReadOnlyStore(seeded));

        assert!(matches!(repo.add(Todo::new(2, "eggs")), Err(TodoError::Storage(_))));
        assert!(matches!(repo.toggle(1), Err(TodoError::Storage(_))));
        assert_eq!(repo.load(), vec![Todo::new(1, "milk")]);
    }

    #[test]
    fn test_unreadable_slot_is_never_overwritten() {
        let seeded = r#"[{"id":1,"body":"a","done":false},{"id":2,"body":"b","done":false}]"#;
        let mut repo = TodoRepository::new(UnreadableStore(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, seeded)));

        assert!(repo.load().is_empty());
        assert!(matches!(repo.read_all(), Err(TodoError::Storage(_))));
        assert!(matches!(repo.add(Todo::new(3, "c")), Err(TodoError::Storage(_))));
        assert!(matches!(repo.toggle(1), Err(TodoError::Storage(_))));
        assert!(matches!(repo.delete(2), Err(TodoError::Storage(_))));

        let raw = repo.store().0.get(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some(seeded));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let raw = r#"[{"id":1,"body":"a","done":false},{"id":1,"body":"b","done":true},{"id":2,"body":"c","done":false}]"#;
        let mut repo = TodoRepository::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, raw));

        assert_eq!(repo.load(), vec![Todo::new(1, "a"), Todo::new(2, "c")]);

        repo.delete(1).unwrap();
        assert_eq!(repo.load(), vec![Todo::new(2, "c")]);
    }
}
