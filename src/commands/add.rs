use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; prompted for when omitted
    text: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    // Empty input is a no-op; the store itself does not validate text.
    let text = text.trim().to_string();
    if text.is_empty() {
        msg_warning!(Message::EmptyTaskText);
        return Ok(());
    }

    let mut store = Tasks::new()?;
    store.insert(&Task::new(&text)).await?;

    msg_success!(Message::TaskAdded(text));
    Ok(())
}
