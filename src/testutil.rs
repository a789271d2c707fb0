//! Shared test utilities
//!
//! Result tree builders used across test modules. Only compiled in test builds.

use std::cell::RefCell;
use std::time::Duration;

use crate::links::{LinkOutcome, LinkResolver};
use crate::results::{Outcome, ResultNode};

/// Link resolver that records requested groups and shortens them locally.
#[derive(Debug, Default)]
pub struct StubLinks {
    requested: RefCell<Vec<String>>,
}

impl StubLinks {
    /// Groups resolved so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl LinkResolver for StubLinks {
    async fn resolve(&self, group: &str) -> LinkOutcome {
        self.requested.borrow_mut().push(group.to_string());
        LinkOutcome::Shortened(format!("https://logs.test/goto/{group}"))
    }
}

/// Create a childless node that took one second.
#[must_use]
pub fn leaf(name: &str, result: Outcome) -> ResultNode {
    ResultNode::new(name, result, Duration::from_secs(1))
}

/// Create a pot whose tests are named `<pot>-t<index>` with the given outcomes.
#[must_use]
pub fn pot(name: &str, result: Outcome, tests: &[Outcome]) -> ResultNode {
    leaf(name, result).with_children(
        tests
            .iter()
            .enumerate()
            .map(|(i, outcome)| leaf(&format!("{name}-t{i}"), *outcome)),
    )
}

/// The two-pot "Suite A" tree used by end-to-end report tests.
///
/// Pot1 passed with one test and group `g1`; Pot2 failed with one passing
/// and one failing test and no group.
#[must_use]
pub fn suite_a() -> ResultNode {
    let pot1 = ResultNode::new("Pot1", Outcome::Passed, Duration::from_secs(2))
        .with_group("g1")
        .with_children([ResultNode::new(
            "test_ok",
            Outcome::Passed,
            Duration::from_secs(2),
        )]);
    let pot2 = ResultNode::new("Pot2", Outcome::Failed, Duration::from_secs(3)).with_children([
        ResultNode::new("test_fine", Outcome::Passed, Duration::from_millis(1500)),
        ResultNode::new("test_broken", Outcome::Failed, Duration::from_millis(1500)),
    ]);

    ResultNode::new("Suite A", Outcome::Failed, Duration::from_secs(10))
        .with_children([pot1, pot2])
}
