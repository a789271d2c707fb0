//! Suite summary
//!
//! Counts outcomes per level and writes the colored console report.

pub mod report;
pub mod stats;

use std::io::Write;

use anyhow::Result;

use crate::config::ReportConfig;
use crate::links::LinkResolver;
use crate::results::ResultNode;

pub use report::{format_secs, should_detail, suite_line, write_pot_block, write_suite_summary};
pub use stats::{OutcomeCounts, SuiteStats};

/// Write the summary of `root` to `out`.
///
/// The suite line is always written. A pot's block follows when the pot
/// failed or `config.verbose` is set, in tree order.
pub async fn summarize<W, R>(
    out: &mut W,
    root: &ResultNode,
    config: ReportConfig,
    links: &R,
) -> Result<()>
where
    W: Write,
    R: LinkResolver,
{
    write_suite_summary(out, root)?;
    for pot in root.children.iter().filter(|p| should_detail(p, config)) {
        write_pot_block(out, pot, links).await?;
    }
    out.flush()?;
    Ok(())
}
