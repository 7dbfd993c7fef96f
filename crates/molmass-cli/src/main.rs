mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("molmass CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let overrides = cli.command.config_overrides();
    let app_config = config::build_config(cli.config.as_deref(), &cli.set_values, &overrides)?;

    let command_result = match cli.command {
        Commands::Generate(_) => {
            info!("Dispatching to 'generate' command.");
            commands::generate::run(&app_config)
        }
        Commands::Calc(args) => {
            info!("Dispatching to 'calc' command.");
            commands::calc::run(args, &app_config)
        }
        Commands::Lookup(args) => {
            info!("Dispatching to 'lookup' command.");
            commands::lookup::run(args, &app_config)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
