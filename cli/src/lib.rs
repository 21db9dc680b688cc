//! Command-line host for the todo view-model.
//!
//! # Overview
//! Each invocation loads the list from the server, performs one action and
//! prints the resulting markup. Action errors are the user-facing messages
//! from `ActionError` and go to stderr.

pub mod transport;

use clap::{Parser, Subcommand};
use todo_view::{render_stats, ActionError, TodoApp, Transport};
use uuid::Uuid;

pub use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Manage the todo list served by the todo API", long_about = None)]
pub struct Cli {
    /// Base URL of the todo API
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Print a complete HTML page instead of the list fragment
    #[arg(long)]
    pub page: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the list (default)
    List,
    /// Add a todo
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark a todo complete or incomplete
    Toggle { id: Uuid },
    /// Delete a todo
    Delete { id: Uuid },
    /// Show the list with a todo in edit mode
    Edit { id: Uuid },
    /// Replace the text of a todo
    Save {
        id: Uuid,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print the total and completed counts
    Stats,
}

/// Load the list, run `command` and return what to print.
pub fn run<T: Transport>(
    app: &mut TodoApp<T>,
    command: &Command,
    page: bool,
) -> Result<String, ActionError> {
    app.load()?;
    match command {
        Command::List => {}
        Command::Add { text } => {
            app.add(&text.join(" "))?;
        }
        Command::Toggle { id } => {
            app.toggle(*id)?;
        }
        Command::Delete { id } => app.delete(*id)?,
        Command::Edit { id } => app.start_edit(*id)?,
        Command::Save { id, text } => {
            app.start_edit(*id)?;
            app.save_edit(*id, &text.join(" "))?;
        }
        Command::Stats => {
            let stats = app.stats();
            return Ok(format!("{}\n{}\n", stats.total_label(), stats.completed_label()));
        }
    }
    if page {
        Ok(app.render_page())
    } else {
        Ok(format!("{}{}\n", app.render(), render_stats(&app.stats())))
    }
}
