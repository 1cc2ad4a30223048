//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;

/// Droid debconf database plugin
#[derive(Parser, Debug)]
#[command(
    name = "droid-debconfdb",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set debconf database entries from the supplied file.
    #[command(
        name = "debconfdb:set",
        long_about = "Set debconf database entries from the supplied file.\n\n\
            The format of the file is first checked to ensure it is correct and is deleted \
            after it is successfully processed (unless the --no-cleanup option is given)."
    )]
    DebconfdbSet(commands::debconfdb_set::SetArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;
        let flags = OutputFlags { no_color, quiet };
        let app = AppContext::new(&flags, &YamlConfigStore::from_env())?;
        match command {
            Command::DebconfdbSet(args) => commands::debconfdb_set::run(&app, &args).await,
        }
    }
}
