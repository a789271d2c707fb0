//! Potsum - test result tree summaries
//!
//! CLI entry point: reads a result tree and prints its summary to stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use potsum::{read_test_results, summarize, KibanaLinks, LinkConfig, ReportConfig};

/// Summarize the results of a test suite
///
/// Prints pot and test counts for the suite, then details failing pots
/// (or every pot with --verbose) along with links to their node logs.
#[derive(Parser, Debug)]
#[command(name = "potsum", version, about)]
struct Cli {
    /// Path to a file containing results of a test suite
    #[arg(long = "test_results")]
    test_results: PathBuf,

    /// List all pots contained in a test suite, instead of only failing ones
    #[arg(long)]
    verbose: bool,
}

/// Install a stderr log subscriber, honoring `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let root = read_test_results(&cli.test_results)?;
    let links = KibanaLinks::new(LinkConfig::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    summarize(&mut out, &root, ReportConfig::new(cli.verbose), &links)
        .await
        .context("Failed to write summary")?;

    Ok(())
}
