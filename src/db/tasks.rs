//! Durable CRUD over task records.
//!
//! Every operation is asynchronous and awaited sequentially by the command
//! layer; the underlying SQLite work is short and synchronous. Mutations do
//! not touch the in-memory cache, which is reloaded wholesale afterwards.

use super::db::Db;
use super::error::StoreError;
use crate::libs::task::{Task, TaskPatch};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_TASK: &str = "INSERT INTO tasks (id, text, completed, date) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, text, completed, date FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, text, completed, date FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET text = ?2, completed = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store in the platform data directory, creating the schema
    /// on first run.
    pub fn new() -> Result<Self, StoreError> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Opens the store at an explicit database path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a freshly constructed record. Two adds within the same
    /// millisecond collide on the primary key and surface as a write error.
    pub async fn insert(&mut self, task: &Task) -> Result<(), StoreError> {
        self.conn
            .execute(INSERT_TASK, params![task.id, task.text, task.completed, task.date])
            .map_err(StoreError::Write)?;
        Ok(())
    }

    /// Full unordered snapshot of every stored record.
    pub async fn fetch_all(&mut self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS).map_err(StoreError::Read)?;
        let task_iter = stmt.query_map([], row_to_task).map_err(StoreError::Read)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task.map_err(StoreError::Read)?);
        }
        Ok(tasks)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Task>, StoreError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], row_to_task)
            .optional()
            .map_err(StoreError::Read)
    }

    /// Merges `patch` onto the stored record and writes it back. Fails with
    /// [`StoreError::NotFound`] when the id is absent; never creates a record.
    pub async fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Task, StoreError> {
        let mut task = self.get_by_id(id).await?.ok_or(StoreError::NotFound(id))?;
        patch.apply(&mut task);

        self.conn
            .execute(UPDATE_TASK, params![task.id, task.text, task.completed])
            .map_err(StoreError::Write)?;
        Ok(task)
    }

    /// Removes the record by id. Succeeds even when the id is absent.
    pub async fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.conn.execute(DELETE_TASK, params![id]).map_err(StoreError::Write)?;
        Ok(())
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        completed: row.get(2)?,
        date: row.get(3)?,
    })
}
