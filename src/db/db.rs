use crate::db::error::StoreError;
use crate::db::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskeep.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating on first run) the task database in the platform data
    /// directory and applies any pending migrations.
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path. Used by `new` and by tests
    /// that point the store at a temporary location.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, StoreError> {
        let mut conn = Connection::open(path).map_err(StoreError::Open)?;
        MigrationManager::new().apply_pending(&mut conn).map_err(StoreError::Open)?;

        Ok(Db { conn })
    }
}
