use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "taskrow",
    about = concat!(
        "[\u{2713}] taskrow v",
        env!("CARGO_PKG_VERSION"),
        " - a to-do list in your terminal"
    ),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON (`list`, or the final list after a TUI session)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./taskrow.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Add a task with this title (repeatable)
    #[arg(short = 't', long = "task", value_name = "TITLE", global = true)]
    pub tasks: Vec<String>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH", global = true)]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the task list without starting the TUI
    List,
}
