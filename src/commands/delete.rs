use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    id: i64,
}

/// Deletion makes no existence check; an absent id is a successful no-op.
pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    store.delete(args.id).await?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
