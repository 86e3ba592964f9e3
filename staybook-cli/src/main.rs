//! Main entry point for the staybook CLI.
//!
//! This is the command-line interface for the staybook booking validator.
//! It provides commands for managing bookings:
//! - `create`: Validate and record a new booking
//! - `extend`: Lengthen an existing booking
//! - `check`: Report whether a booking could be created
//! - `list`: List stored bookings
//! - `init`: Initialize the data directory and database

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // install fails only if a logger is already registered
    let _ = staybook::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        lookup: cli.lookup,
    };

    let result = match cli.command {
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Extend(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e @ CliError::Denied(_)) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
