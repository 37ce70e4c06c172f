//! Command-line surface of the application.
//!
//! Each subcommand translates user input into store calls followed by a
//! cache reload and a re-render. Running without a subcommand enters the
//! interactive menu loop.

pub mod add;
pub mod complete;
pub mod delete;
pub mod interactive;
pub mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(args).await,
            Some(Commands::Complete(args)) => complete::cmd(args).await,
            Some(Commands::Delete(args)) => delete::cmd(args).await,
            Some(Commands::List(args)) => list::cmd(args).await,
            None => interactive::cmd().await,
        }
    }
}
