#[cfg(test)]
mod tests {
    use chrono::Utc;
    use std::path::PathBuf;
    use taskeep::db::error::StoreError;
    use taskeep::db::tasks::Tasks;
    use taskeep::libs::task::{Task, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("taskeep.db")
        }

        fn store(&self) -> Tasks {
            Tasks::open(self.db_path()).unwrap()
        }
    }

    impl AsyncTestContext for TaskTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_added_task_has_defaults(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let before = Utc::now();
        let task = Task::new("Buy milk");
        store.insert(&task).await.unwrap();

        let tasks = store.fetch_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);

        // The date must parse and lie no earlier than the call time, and the
        // id encodes the same instant in epoch milliseconds.
        let created = tasks[0].created_at().expect("date must be valid RFC 3339");
        assert!(created.timestamp_millis() >= before.timestamp_millis());
        assert_eq!(created.timestamp_millis(), tasks[0].id);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_update_missing_id_fails_not_found(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let err = store.update(42, &TaskPatch::completed(true)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));

        // A failed update must never create a record.
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_delete_missing_id_is_noop(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.delete(42).await.unwrap();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_add_complete_delete_scenario(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        // Add
        let task = Task::new("Buy milk");
        store.insert(&task).await.unwrap();
        let tasks = store.fetch_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);

        // Complete
        let updated = store.update(task.id, &TaskPatch::completed(true)).await.unwrap();
        assert!(updated.completed);
        let tasks = store.fetch_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);

        // Delete
        store.delete(task.id).await.unwrap();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_patch_merges_only_given_fields(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let task = Task::new("Original");
        store.insert(&task).await.unwrap();

        // Text-only patch leaves completion alone.
        let patch = TaskPatch {
            text: Some("Renamed".to_string()),
            completed: None,
        };
        let updated = store.update(task.id, &patch).await.unwrap();
        assert_eq!(updated.text, "Renamed");
        assert!(!updated.completed);

        // Completion-only patch leaves the text alone.
        let updated = store.update(task.id, &TaskPatch::completed(true)).await.unwrap();
        assert_eq!(updated.text, "Renamed");
        assert!(updated.completed);

        // The creation date never changes.
        assert_eq!(updated.date, task.date);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_duplicate_id_fails_as_write_error(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let task = Task::new("First");
        store.insert(&task).await.unwrap();
        let err = store.insert(&task).await.unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));

        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[tokio::test]
    async fn test_records_survive_reopen(ctx: &mut TaskTestContext) {
        let task = Task::new("Persistent");
        {
            let mut store = ctx.store();
            store.insert(&task).await.unwrap();
        }

        let mut store = ctx.store();
        let tasks = store.fetch_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
    }
}
