//! Database layer for the taskeep application.
//!
//! Persistence is built on SQLite, with a versioned migration system for
//! schema creation and a typed store for task records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskeep::db::tasks::Tasks;
//! use taskeep::libs::task::Task;
//!
//! # async fn example() -> Result<(), taskeep::db::error::StoreError> {
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&Task::new("Review code")).await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod migrations;
pub mod tasks;
