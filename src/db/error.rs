use std::io;
use thiserror::Error;

/// Failure taxonomy for the task store.
///
/// Every store operation resolves to exactly one outcome: a success value or
/// one of these errors. There are no partial-completion states.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create the data directory: {0}")]
    DataDir(#[from] io::Error),

    #[error("failed to open the task database: {0}")]
    Open(#[source] rusqlite::Error),

    #[error("failed to read tasks: {0}")]
    Read(#[source] rusqlite::Error),

    #[error("failed to write task: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("task {0} not found")]
    NotFound(i64),
}
