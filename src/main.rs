use std::path::Path;

use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let config = cli.config.as_deref().map(Path::new);
            if let Err(e) = jot::tui::run(config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
