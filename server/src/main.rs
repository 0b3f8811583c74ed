// server/src/main.rs

// Entry point for the hospital management shell. Argument parsing and the
// interactive session live in the cli module.

use anyhow::Result;
use hms_server::cli::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();
    start_cli()
}
