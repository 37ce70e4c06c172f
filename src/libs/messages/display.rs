//! Display implementation for taskeep application messages.
//!
//! Single source of truth for all user-facing text. Keeping the wording in
//! one place makes the vocabulary consistent and the messages testable.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task '{}' added", text),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with id {} not found", id),
            Message::EmptyTaskText => "Task text is empty, nothing to add".to_string(),
            Message::NoTasksFound => "No tasks to show".to_string(),
            Message::NoOpenTasks => "No open tasks to complete".to_string(),
            Message::TasksHeader => "Tasks".to_string(),

            // === VIEW MESSAGES ===
            Message::FilterSet(filter) => format!("Filter set to '{}'", filter),
            Message::SortSet(sort) => format!("Sort order set to '{}'", sort),

            // === PROMPTS ===
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectFilter => "Show which tasks?".to_string(),
            Message::PromptSelectSort => "Order by".to_string(),

            // === ERROR MESSAGES ===
            Message::StoreFailed(err) => format!("Task store operation failed: {}", err),
        };
        write!(f, "{}", text)
    }
}
