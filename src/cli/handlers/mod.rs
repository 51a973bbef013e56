use crate::cli::commands::{Cli, Commands};
use crate::cli::output::{format_task_list, task_list_json};
use crate::io::config_io;
use crate::model::{AppConfig, TaskList};

/// Build the starting list: config tasks first, then `--task` titles.
pub fn initial_task_list(config: &AppConfig, extra_titles: &[String]) -> TaskList {
    let entries = config
        .tasks
        .iter()
        .map(|seed| (seed.title.clone(), seed.done))
        .chain(extra_titles.iter().map(|title| (title.clone(), false)));
    TaskList::from_entries(entries)
}

/// Load config relative to the working directory
pub fn load_config_cwd(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(config_io::load_config(cli.config.as_deref(), &cwd)?)
}

/// Print a task list the way `--json` asks for
pub fn print_task_list(list: &TaskList, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", task_list_json(list)?);
    } else {
        for line in format_task_list(list) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::List) => cmd_list(&cli),
        None => crate::tui::run(&cli),
    }
}

fn cmd_list(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_cwd(cli)?;
    let list = initial_task_list(&config, &cli.tasks);
    print_task_list(&list, cli.json)
}
