//! Potsum - test result tree summaries
//!
//! Reads a suite → pot → test result tree and prints a colored console
//! summary with outcome counts, per-test detail for failing pots and links
//! to each pot's node logs.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod links;
pub mod results;
pub mod summary;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use config::{LinkConfig, ReportConfig};
pub use links::{KibanaLinks, LinkOutcome, LinkResolver};
pub use results::{read_test_results, Outcome, ResultNode};
pub use summary::{summarize, OutcomeCounts, SuiteStats};
