use super::db::Db;
use crate::libs::task::{NewTask, Task, TaskPatch};
use rusqlite::{params, Result, Row};

const SELECT_TASKS: &str = "SELECT id, name, description, completed, created_at FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, description, completed, created_at FROM tasks WHERE id = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description, created_at) VALUES (?1, ?2, ?3)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?2, description = ?3, completed = ?4 WHERE id = ?1";
const COMPLETE_TASK: &str = "UPDATE tasks SET completed = 1 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task repository over a borrowed connection.
///
/// Every mutating operation re-reads the row afterwards so callers always get
/// what is actually stored. Operations on a missing id return `None`/`false`
/// instead of an error; turning that into a 404 is the caller's business.
pub struct Tasks<'a> {
    db: &'a Db,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// All tasks in store order (primary key order in practice).
    pub fn list(&self) -> Result<Vec<Task>> {
        self.db.query_all(SELECT_TASKS, [], map_task)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.db.query_one(SELECT_TASK_BY_ID, params![id], map_task)
    }

    /// Inserts a validated task and returns the stored row.
    pub fn insert(&self, task: &NewTask) -> Result<Task> {
        let id = self
            .db
            .execute(INSERT_TASK, params![task.name.as_str(), task.description, task.created_at])?;

        self.get_by_id(id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    /// Merges `patch` over the stored task.
    pub fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>> {
        let Some(current) = self.get_by_id(id)? else {
            return Ok(None);
        };
        let merged = patch.apply(&current);
        self.db
            .execute(UPDATE_TASK, params![id, merged.name, merged.description, merged.completed])?;

        self.get_by_id(id)
    }

    /// Forces `completed` to true. Completing a completed task is a no-op.
    pub fn complete(&self, id: i64) -> Result<Option<Task>> {
        if self.get_by_id(id)?.is_none() {
            return Ok(None);
        }
        self.db.execute(COMPLETE_TASK, params![id])?;

        self.get_by_id(id)
    }

    /// Hard-deletes the task; returns whether it existed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        if self.get_by_id(id)?.is_none() {
            return Ok(false);
        }
        self.db.execute(DELETE_TASK, params![id])?;

        Ok(true)
    }
}

fn map_task(row: &Row<'_>) -> Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get::<_, Option<bool>>(3)?.unwrap_or(false),
        created_at: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
