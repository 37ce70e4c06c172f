use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single to-do item as it is persisted.
///
/// The `id` doubles as the creation instant in epoch milliseconds and is
/// assigned exactly once, at construction. `date` carries the same instant
/// as an RFC 3339 string and is never rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub date: String,
}

impl Task {
    pub fn new(text: &str) -> Self {
        let now = Utc::now();
        Task {
            id: now.timestamp_millis(),
            text: text.to_string(),
            completed: false,
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Creation time parsed back from the stored `date` string.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date).ok().map(|dt| dt.with_timezone(&Utc))
    }

    /// Ordering key in epoch milliseconds. An unparseable `date` falls back
    /// to the id, which encodes the same instant.
    pub fn sort_key(&self) -> i64 {
        self.created_at().map(|dt| dt.timestamp_millis()).unwrap_or(self.id)
    }
}

/// Partial update merged onto a stored task. Absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        TaskPatch {
            text: None,
            completed: Some(value),
        }
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(text) = &self.text {
            task.text = text.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Which slice of the cache the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

/// Creation-date ordering of the rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    DateAsc,
    #[default]
    DateDesc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::DateAsc => "date-asc",
            SortOrder::DateDesc => "date-desc",
        };
        write!(f, "{}", name)
    }
}
