//! Interactive menu loop.
//!
//! Holds a single [`AppState`] across iterations. Mutating actions go
//! store → cache reload → render; filter and sort changes only update the
//! state and re-render from the existing cache. A failed store call is
//! logged and leaves the last rendered state unchanged.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::state::AppState;
use crate::libs::task::{SortOrder, Task, TaskFilter, TaskPatch};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub async fn cmd() -> Result<()> {
    let mut store = Tasks::new()?;
    let mut state = AppState::new();
    state.reload(&mut store).await?;
    render(&state)?;

    let actions = ["Add task", "Complete task", "Delete task", "Change filter", "Change sort", "Quit"];
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => handle_add(&mut store, &mut state).await?,
            1 => handle_complete(&mut store, &mut state).await?,
            2 => handle_delete(&mut store, &mut state).await?,
            3 => handle_filter(&mut state)?,
            4 => handle_sort(&mut state)?,
            _ => break,
        }
    }

    Ok(())
}

fn render(state: &AppState) -> Result<()> {
    let visible = state.visible();
    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(&visible)
}

/// Reloads the cache after a successful mutation and re-renders.
async fn refresh(store: &mut Tasks, state: &mut AppState) -> Result<()> {
    if let Err(err) = state.reload(store).await {
        msg_error!(Message::StoreFailed(err.to_string()));
        return Ok(());
    }
    render(state)
}

async fn handle_add(store: &mut Tasks, state: &mut AppState) -> Result<()> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskText.to_string())
        .allow_empty(true)
        .interact_text()?;

    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::EmptyTaskText);
        return Ok(());
    }

    if let Err(err) = store.insert(&Task::new(&text)).await {
        msg_error!(Message::StoreFailed(err.to_string()));
        return Ok(());
    }

    msg_success!(Message::TaskAdded(text));
    refresh(store, state).await
}

async fn handle_complete(store: &mut Tasks, state: &mut AppState) -> Result<()> {
    // Only open tasks offer a complete action.
    let open: Vec<Task> = state.visible().into_iter().filter(|task| !task.completed).collect();
    if open.is_empty() {
        msg_info!(Message::NoOpenTasks);
        return Ok(());
    }

    let labels: Vec<String> = open.iter().map(task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .interact()?;

    let id = open[selection].id;
    match store.update(id, &TaskPatch::completed(true)).await {
        Ok(task) => {
            msg_success!(Message::TaskCompleted(task.id));
            refresh(store, state).await
        }
        Err(err) => {
            msg_error!(Message::StoreFailed(err.to_string()));
            Ok(())
        }
    }
}

async fn handle_delete(store: &mut Tasks, state: &mut AppState) -> Result<()> {
    let visible = state.visible();
    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let labels: Vec<String> = visible.iter().map(task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .interact()?;

    let id = visible[selection].id;
    if let Err(err) = store.delete(id).await {
        msg_error!(Message::StoreFailed(err.to_string()));
        return Ok(());
    }

    msg_success!(Message::TaskDeleted(id));
    refresh(store, state).await
}

fn handle_filter(state: &mut AppState) -> Result<()> {
    let options = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];
    let labels: Vec<String> = options.iter().map(|filter| filter.to_string()).collect();
    let current = options.iter().position(|f| *f == state.filter).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectFilter.to_string())
        .items(&labels)
        .default(current)
        .interact()?;

    state.filter = options[selection];
    msg_info!(Message::FilterSet(state.filter.to_string()));
    render(state)
}

fn handle_sort(state: &mut AppState) -> Result<()> {
    let options = [SortOrder::DateAsc, SortOrder::DateDesc];
    let labels: Vec<String> = options.iter().map(|sort| sort.to_string()).collect();
    let current = options.iter().position(|s| *s == state.sort).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectSort.to_string())
        .items(&labels)
        .default(current)
        .interact()?;

    state.sort = options[selection];
    msg_info!(Message::SortSet(state.sort.to_string()));
    render(state)
}

fn task_label(task: &Task) -> String {
    format!("{} ({})", task.text, View::format_date(&task.date))
}
