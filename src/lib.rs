//! # Taskeep - a local to-do list keeper
//!
//! A command-line utility for keeping a personal task list in an embedded
//! SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, complete, and delete tasks
//! - **Filtered Views**: Show all, only active, or only completed tasks
//! - **Sorted Views**: Order tasks by creation date, ascending or descending
//! - **Interactive Mode**: A menu-driven loop for working through the list
//! - **JSON Output**: Export the current view as JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskeep::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
