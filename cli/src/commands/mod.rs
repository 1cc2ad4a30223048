//! Command implementations

pub mod debconfdb_set;

use clap::Args;

/// Check-mode flag shared by host plugin commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CheckArgs {
    /// Run in check mode: report what would change without changing anything
    #[arg(short, long)]
    pub check: bool,
}
