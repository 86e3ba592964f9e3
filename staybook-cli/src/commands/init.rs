//! `staybook init`: set up the data directory ahead of the first booking.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use staybook::operations::{init_database, InitOptions};

/// Initialize staybook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Ignores `--disable-autoinit`.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_dry_run(self.dry_run);

        let result = init_database(&options)?;

        if result.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!("Would initialize staybook in: {}", result.data_dir.display());
        } else {
            println!("Initialized staybook in: {}", result.data_dir.display());
        }

        for step in &result.steps {
            println!("  - {}", step.describe(result.dry_run));
        }

        Ok(())
    }
}
