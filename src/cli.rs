use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ck_core::PasswordOptions;

/// Clipboard history keeper
#[derive(Debug, Parser)]
#[command(name = "clipkeep", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/clipkeep/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Watch the clipboard and log every new history entry (default)
    Watch(WatchArgs),
    /// Print a random password
    Password(PasswordArgs),
}

#[derive(Debug, Default, Args)]
pub struct WatchArgs {
    /// Poll interval in milliseconds, overrides the config file
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Default, Args)]
pub struct PasswordArgs {
    /// Number of characters
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Mix in special characters
    #[arg(long, conflicts_with = "no_special")]
    pub special: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,
}

impl PasswordArgs {
    /// Command line flags win over the configured defaults.
    pub fn apply(&self, defaults: PasswordOptions) -> PasswordOptions {
        PasswordOptions {
            length: self.length.unwrap_or(defaults.length),
            use_upper: defaults.use_upper && !self.no_upper,
            use_lower: defaults.use_lower && !self.no_lower,
            use_special: if self.special {
                true
            } else {
                defaults.use_special && !self.no_special
            },
        }
    }
}
