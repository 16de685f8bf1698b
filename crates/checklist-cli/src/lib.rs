//! # checklist-cli
//!
//! Command-line front end: prints the checklist of an OpenAPI document to
//! stdout. Logs and diagnostics go to stderr only.

use anyhow::Context;
use clap::Parser;
use openapi_checklist::DEFAULT_SPEC_FILE;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Print a markdown checklist of every path and operation in an OpenAPI document
#[derive(Parser, Debug)]
#[command(name = "openapi-checklist")]
#[command(version)]
#[command(about = "Print a markdown checklist of every path and operation in an OpenAPI document")]
pub struct Args {
    /// OpenAPI document to read (YAML or JSON)
    #[arg(default_value = DEFAULT_SPEC_FILE)]
    pub input: PathBuf,
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the extraction for `args`, writing the checklist to `writer`
pub fn execute<W: Write>(args: &Args, writer: &mut W) -> anyhow::Result<usize> {
    debug!("Input document: {}", args.input.display());

    let written = openapi_checklist::run(&args.input, writer)
        .with_context(|| format!("Failed to build checklist from {}", args.input.display()))?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_checklist::{ChecklistError, ErrorKind};
    use std::fs;

    #[test]
    fn test_default_input() {
        let args = Args::try_parse_from(["openapi-checklist"]).unwrap();
        assert_eq!(args.input, PathBuf::from("kinvest_prod.yaml"));
    }

    #[test]
    fn test_explicit_input() {
        let args = Args::try_parse_from(["openapi-checklist", "specs/other.yml"]).unwrap();
        assert_eq!(args.input, PathBuf::from("specs/other.yml"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Args::try_parse_from(["openapi-checklist", "a.yaml", "b.yaml"]).is_err());
    }

    #[test]
    fn test_execute_prints_checklist() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("kinvest_prod.yaml");
        fs::write(
            &input,
            "paths:\n  /a:\n    get:\n      summary: \"J_Fetch thing\"\n  /b:\n    post: {}\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let written = execute(&Args { input }, &mut out).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "- [ ] /a (get) : Fetch thing\n- [ ] /b (post)\n"
        );
    }

    #[test]
    fn test_execute_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("kinvest_prod.yaml");

        let mut out = Vec::new();
        let err = execute(&Args { input }, &mut out).unwrap_err();

        let cause = err.downcast_ref::<ChecklistError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::FileAccess);
        assert!(format!("{:#}", err).contains("kinvest_prod.yaml"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_reports_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("kinvest_prod.yaml");
        fs::write(&input, "openapi: 3.0.1\n").unwrap();

        let mut out = Vec::new();
        let err = execute(&Args { input }, &mut out).unwrap_err();

        let cause = err.downcast_ref::<ChecklistError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::MissingKey);
        assert!(format!("{:#}", err).contains("paths"));
    }
}
