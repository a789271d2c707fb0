//! Outcome counting
//!
//! Tallies passed/skipped/failed nodes for a sequence and for a whole suite.

use std::fmt;

use crate::results::{Outcome, ResultNode};

/// Number of nodes per outcome within a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    /// Nodes that passed
    pub passed: usize,
    /// Nodes that were skipped
    pub skipped: usize,
    /// Nodes that failed
    pub failed: usize,
}

impl OutcomeCounts {
    /// Count the outcomes of `nodes`. An empty sequence yields all zeros.
    pub fn tally<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a ResultNode>,
    {
        nodes.into_iter().fold(Self::default(), |mut counts, node| {
            counts.record(node.result);
            counts
        })
    }

    /// Add a single outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Total number of counted nodes
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.skipped + self.failed
    }
}

impl fmt::Display for OutcomeCounts {
    /// Renders as `(<p> passed, <s> skipped, <f> failed)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} passed, {} skipped, {} failed)",
            self.passed, self.skipped, self.failed
        )
    }
}

/// Pot and test statistics for a suite root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteStats {
    /// Number of pots (direct children of the root)
    pub pot_count: usize,
    /// Outcome counts across pots
    pub pots: OutcomeCounts,
    /// Number of tests across all pots
    pub test_count: usize,
    /// Outcome counts across all tests
    pub tests: OutcomeCounts,
}

impl SuiteStats {
    /// Compute statistics for `root`, flattening the tests of every pot.
    #[must_use]
    pub fn of(root: &ResultNode) -> Self {
        let pots = &root.children;
        let tests: Vec<&ResultNode> = flatten_tests(root).collect();

        Self {
            pot_count: pots.len(),
            pots: OutcomeCounts::tally(pots),
            test_count: tests.len(),
            tests: OutcomeCounts::tally(tests),
        }
    }
}

/// Tests of every pot in pot order, then child order.
pub fn flatten_tests(root: &ResultNode) -> impl Iterator<Item = &ResultNode> {
    root.children.iter().flat_map(|pot| pot.children.iter())
}
