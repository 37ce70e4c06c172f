use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::state::AppState;
use crate::libs::task::{SortOrder, TaskFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show all, only active, or only completed tasks
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
    /// Creation-date ordering
    #[arg(short, long, value_enum, default_value_t = SortOrder::DateDesc)]
    sort: SortOrder,
    /// Emit the visible tasks as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut state = AppState::new();
    state.filter = args.filter;
    state.sort = args.sort;
    state.reload(&mut store).await?;

    let visible = state.visible();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&visible)?;
    Ok(())
}
