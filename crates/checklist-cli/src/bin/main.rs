//! OpenAPI checklist CLI
//!
//! Reads `kinvest_prod.yaml` (or the given file) and prints one checklist
//! line per path and operation.

use clap::Parser;
use tracing::info;

use checklist_cli::{execute, init_logging, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the checklist
    init_logging();

    let stdout = std::io::stdout();
    let written = execute(&args, &mut stdout.lock())?;

    info!("Wrote {} checklist lines", written);

    Ok(())
}
