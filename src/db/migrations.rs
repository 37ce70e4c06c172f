//! Database schema migration management.
//!
//! Maintains a precise record of applied schema versions and applies pending
//! migrations during database initialization. Each migration runs inside its
//! own transaction, so a failure leaves the schema at the previous version.

use crate::msg_debug;
use rusqlite::{params, Connection, Result, Transaction};

/// Tracking table recording every applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_TASKS: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    text TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    date TEXT NOT NULL
)";
const INDEX_TASKS_DATE: &str = "CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks (date)";
const INDEX_TASKS_COMPLETED: &str = "CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks (completed)";

/// A single schema change: version number, human-readable name, and the
/// transformation applied within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        Self {
            migrations: vec![Migration {
                version: 1,
                name: "create_tasks",
                up: migrate_v1_create_tasks,
            }],
        }
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn apply_pending(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = get_db_version(conn)?;

        for migration in self.migrations.iter().filter(|m| m.version > current) {
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            msg_debug!(format!("Applied migration v{}: {}", migration.version, migration.name));
        }

        Ok(())
    }
}

/// Current schema version; zero when no migration has run yet.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))
}

/// v1: the tasks table plus secondary lookup indexes on `date` and
/// `completed`.
fn migrate_v1_create_tasks(tx: &Transaction) -> Result<()> {
    tx.execute(SCHEMA_TASKS, [])?;
    tx.execute(INDEX_TASKS_DATE, [])?;
    tx.execute(INDEX_TASKS_COMPLETED, [])?;
    Ok(())
}
