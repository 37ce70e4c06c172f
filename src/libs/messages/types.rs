/// Every user-facing message in the application.
///
/// Text lives in the `Display` implementation (`display.rs`); variants carry
/// only the dynamic parts.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    EmptyTaskText,
    NoTasksFound,
    NoOpenTasks,
    TasksHeader,

    // === VIEW MESSAGES ===
    FilterSet(String),
    SortSet(String),

    // === PROMPTS ===
    PromptTaskText,
    PromptSelectAction,
    PromptSelectTask,
    PromptSelectFilter,
    PromptSelectSort,

    // === ERROR MESSAGES ===
    StoreFailed(String),
}
