//! Report lines
//!
//! Renders the suite line and per-pot blocks. Pots and tests are printed
//! in tree order, each line colored by its own outcome.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use super::stats::SuiteStats;
use crate::config::ReportConfig;
use crate::links::LinkResolver;
use crate::results::{Outcome, ResultNode};

/// Format a duration as seconds with one decimal place.
#[must_use]
pub fn format_secs(duration: Duration) -> String {
    format!("{:.1}", duration.as_secs_f64())
}

/// The uncolored one-line summary of a suite.
#[must_use]
pub fn suite_line(root: &ResultNode) -> String {
    let stats = SuiteStats::of(root);
    format!(
        "Suite '{}' contains {} pots {} with a total of {} tests {} and terminated after {}s",
        root.name,
        stats.pot_count,
        stats.pots,
        stats.test_count,
        stats.tests,
        format_secs(root.duration)
    )
}

/// Whether a pot gets a detailed block
#[must_use]
pub fn should_detail(pot: &ResultNode, config: ReportConfig) -> bool {
    config.verbose || pot.result == Outcome::Failed
}

/// Header line of a pot block
#[must_use]
pub fn pot_header(pot: &ResultNode) -> String {
    format!(
        "Pot '{}' (duration: {}s) contains {} test(s):",
        pot.name,
        format_secs(pot.duration),
        pot.children.len()
    )
}

/// Bullet line for a single test
#[must_use]
pub fn test_line(test: &ResultNode) -> String {
    format!("* {} (duration: {}s)", test.name, format_secs(test.duration))
}

/// Write the suite line followed by a blank line.
pub fn write_suite_summary<W: Write>(out: &mut W, root: &ResultNode) -> Result<()> {
    writeln!(out, "{}\n", suite_line(root))?;
    Ok(())
}

/// Write the block for one pot: header, one line per test, and the logs
/// link when the pot has a log group.
pub async fn write_pot_block<W, R>(out: &mut W, pot: &ResultNode, links: &R) -> Result<()>
where
    W: Write,
    R: LinkResolver,
{
    let color = pot.result.color();
    writeln!(out, "{}", pot_header(pot).color(color))?;
    for test in &pot.children {
        writeln!(out, "{}", test_line(test).color(test.result.color()))?;
    }

    if let Some(group) = pot.log_group() {
        let link = links.resolve(group).await;
        debug!(pot = %pot.name, group, shortened = link.is_shortened(), "node logs link");
        writeln!(out, "{}\n", format!("Node logs: {link}").color(color))?;
    }

    Ok(())
}
