//! Argument parsing: global flags and the five subcommands.

use crate::commands::{CheckCommand, CreateCommand, ExtendCommand, InitCommand, ListCommand};
use clap::{Parser, Subcommand};
use staybook::LookupStrategy;
use std::path::PathBuf;

/// Command-line tool for validating and recording short-term rental bookings.
#[derive(Parser)]
#[command(name = "staybook")]
#[command(version, about = "Validate and record short-term rental bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "STAYBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "STAYBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "STAYBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// How existing bookings are compared (first-match or all-matches)
    #[arg(long, value_name = "STRATEGY", global = true, env = "STAYBOOK_LOOKUP")]
    pub lookup: Option<LookupStrategy>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate and record a new booking
    Create(CreateCommand),

    /// Extend an existing booking to a larger number of nights
    Extend(ExtendCommand),

    /// Check whether a booking could be created, without recording it
    Check(CheckCommand),

    /// List stored bookings
    List(ListCommand),

    /// Initialize staybook data directory and database
    Init(InitCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lookup_flag_parses() {
        let cli = Cli::try_parse_from([
            "staybook",
            "--lookup",
            "all-matches",
            "check",
            "--payload",
            "{}",
        ])
        .unwrap();
        assert_eq!(cli.lookup, Some(LookupStrategy::AllMatches));
    }

    #[test]
    fn test_payload_conflicts_with_flags() {
        let parsed = Cli::try_parse_from([
            "staybook",
            "create",
            "--guest",
            "GuestA",
            "--payload",
            "{}",
        ]);
        assert!(parsed.is_err());
    }
}
