use crate::db::error::StoreError;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskPatch;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Id of the task to mark as completed
    id: i64,
}

/// Completion is one-way: `completed` moves from false to true and no
/// reversal is exposed anywhere in the interface.
pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let mut store = Tasks::new()?;

    match store.update(args.id, &TaskPatch::completed(true)).await {
        Ok(task) => {
            msg_success!(Message::TaskCompleted(task.id));
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
