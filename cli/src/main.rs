use std::process::ExitCode;

use clap::Parser;
use todo_cli::{run, Cli, Command, UreqTransport};
use todo_view::{TodoApp, TodoClient};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::List);
    tracing::debug!(base_url = %cli.base_url, ?command, "starting");

    let mut app = TodoApp::new(TodoClient::new(&cli.base_url), UreqTransport::new());
    match run(&mut app, &command, cli.page) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
