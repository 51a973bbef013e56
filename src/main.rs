use clap::Parser;
use taskrow::cli::commands::Cli;
use taskrow::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let _log_guard = match cli.log.as_deref().map(taskrow::logging::init_file_logging) {
        Some(Err(e)) => {
            eprintln!("error: could not open log file: {}", e);
            std::process::exit(1);
        }
        Some(Ok(guard)) => guard,
        None => None,
    };

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
