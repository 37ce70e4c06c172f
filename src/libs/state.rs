//! Application view state: the task cache plus the active filter and sort.
//!
//! The cache is a full in-memory mirror of the store, reloaded wholesale
//! after every mutation; there is no incremental patching. Filter and sort
//! changes only touch this state and never hit the store.

use crate::db::error::StoreError;
use crate::db::tasks::Tasks;
use crate::libs::task::{SortOrder, Task, TaskFilter};

#[derive(Debug, Default)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub sort: SortOrder,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache with a fresh full snapshot from the store.
    pub async fn reload(&mut self, store: &mut Tasks) -> Result<(), StoreError> {
        self.tasks = store.fetch_all().await?;
        Ok(())
    }

    /// The filtered, sorted sequence the view renders.
    pub fn visible(&self) -> Vec<Task> {
        let mut visible: Vec<Task> = self.tasks.iter().filter(|task| self.filter.matches(task)).cloned().collect();
        visible.sort_by_key(Task::sort_key);
        if self.sort == SortOrder::DateDesc {
            visible.reverse();
        }
        visible
    }
}
