//! CLI argument definitions.

use clap::Parser;

use crate::commands::Command;

/// Administer Infinity configuration from the command line.
#[derive(Parser, Debug)]
#[command(name = "infinity")]
#[command(author, version = env!("INFINITY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Give up on the command after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}
