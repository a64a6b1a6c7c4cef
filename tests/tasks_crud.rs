#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskboard::db::db::Db;
    use taskboard::db::schema::ensure_schema;
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::task::{NewTask, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("tasks.db")).unwrap();
            ensure_schema(&db).unwrap();
            TaskTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn new_task(name: &str, description: &str) -> NewTask {
        NewTask::from_json(&json!({"name": name, "description": description})).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_get(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let created = tasks.insert(&new_task("  Buy milk ", " 2 liters ")).unwrap();
        let fetched = tasks.get_by_id(created.id).unwrap().unwrap();

        assert_eq!(fetched.name, "Buy milk");
        assert_eq!(fetched.description, "2 liters");
        assert!(!fetched.completed);
        assert_eq!(fetched, created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_ids_increase(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let mut last_id = 0;
        for i in 1..=5 {
            let task = tasks.insert(&new_task(&format!("Task {}", i), "")).unwrap();
            assert!(task.id > last_id);
            last_id = task.id;
        }

        let all = tasks.list().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].name, "Task 1");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_ids_not_reused_after_delete(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        let first = tasks.insert(&new_task("First", "")).unwrap();
        let second = tasks.insert(&new_task("Second", "")).unwrap();
        assert!(tasks.delete(second.id).unwrap());

        let third = tasks.insert(&new_task("Third", "")).unwrap();
        assert!(third.id > second.id);
        assert!(third.id > first.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_merges(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let task = tasks.insert(&new_task("Original name", "Original description")).unwrap();

        let patch = TaskPatch::from_json(&json!({"completed": true})).unwrap();
        let updated = tasks.update(task.id, patch).unwrap().unwrap();

        assert_eq!(updated.name, "Original name");
        assert_eq!(updated.description, "Original description");
        assert!(updated.completed);
        assert_eq!(updated.created_at, task.created_at);

        let patch = TaskPatch::from_json(&json!({"name": "Renamed"})).unwrap();
        let renamed = tasks.update(task.id, patch).unwrap().unwrap();
        assert_eq!(renamed.name, "Renamed");
        assert!(renamed.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_complete_is_idempotent(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let task = tasks.insert(&new_task("Walk dog", "")).unwrap();

        let first = tasks.complete(task.id).unwrap().unwrap();
        let second = tasks.complete(task.id).unwrap().unwrap();

        assert!(first.completed);
        assert_eq!(first, second);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_missing_task(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);

        assert!(tasks.get_by_id(999).unwrap().is_none());
        assert!(tasks.update(999, TaskPatch::default()).unwrap().is_none());
        assert!(tasks.complete(999).unwrap().is_none());
        assert!(!tasks.delete(999).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.db);
        let task = tasks.insert(&new_task("Test task", "Comment")).unwrap();

        assert!(tasks.delete(task.id).unwrap());

        assert!(tasks.get_by_id(task.id).unwrap().is_none());
        assert!(tasks.list().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_null_description_reads_as_empty(ctx: &mut TaskTestContext) {
        ctx.db
            .execute("INSERT INTO tasks (name, description, created_at) VALUES ('Legacy', NULL, '2024-01-01 00:00:00')", [])
            .unwrap();

        let legacy = Tasks::new(&ctx.db).list().unwrap().pop().unwrap();
        assert_eq!(legacy.description, "");
    }
}
