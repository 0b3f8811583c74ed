// server/src/cli/cli.rs
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::interactive::run_cli_interactive;

/// Hospital management shell. All records live in memory for the lifetime
/// of one session.
#[derive(Parser, Debug)]
#[command(name = "hms", version, about = "Interactive hospital management shell")]
pub struct CliArgs {
    /// Where to keep the command history between sessions
    #[arg(long, default_value = "hms_cli_history.txt")]
    pub history_file: PathBuf,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    run_cli_interactive(&args.history_file, args.no_banner)
}
