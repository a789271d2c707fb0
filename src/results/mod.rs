//! Test result tree
//!
//! The in-memory model of a suite run and the reader that loads it.

pub mod node;
pub mod reader;

pub use node::{Outcome, ResultNode};
pub use reader::{parse_test_results, read_test_results};
