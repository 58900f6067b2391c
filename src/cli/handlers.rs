use std::path::Path;

use crate::cli::commands::{Cli, Commands, InitArgs};
use crate::cli::output;
use crate::io::config_io;
use crate::keys;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config_override = cli.config.as_deref().map(Path::new);

    match cli.command {
        // No subcommand launches the TUI; main handles that before dispatch
        None => Ok(()),
        Some(Commands::Init(args)) => cmd_init(args, config_override),
        Some(Commands::Keys) => cmd_keys(json),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn cmd_init(
    args: InitArgs,
    config_override: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_io::config_path(config_override);
    config_io::write_default_config(&path, args.force)?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn cmd_keys(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    output::print_keys(keys::BINDINGS, json)?;
    Ok(())
}
