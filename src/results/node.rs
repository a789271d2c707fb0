//! Result tree model
//!
//! A suite is the root node, its children are pots and their children are
//! tests. Anything nested deeper is carried along but never summarized.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::Color;
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a suite, pot or test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Completed without failures
    Passed,
    /// At least one failure
    Failed,
    /// Not executed
    Skipped,
}

impl Outcome {
    /// Terminal color used when rendering a line for this outcome
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Failed => Color::Red,
            Self::Passed => Color::Green,
            Self::Skipped => Color::White,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("Passed"),
            Self::Failed => f.write_str("Failed"),
            Self::Skipped => f.write_str("Skipped"),
        }
    }
}

/// A node of the result tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultNode {
    /// Name of the suite, pot or test
    pub name: String,
    /// Log group the node's output was tagged with (pots only, in practice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// When execution of the node started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Elapsed time
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    /// Outcome of the node
    pub result: Outcome,
    /// Child nodes in execution order
    #[serde(default)]
    pub children: Vec<ResultNode>,
}

impl ResultNode {
    /// Create a leaf node with no group and no start time.
    #[must_use]
    pub fn new(name: &str, result: Outcome, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            group_name: None,
            started_at: None,
            duration,
            result,
            children: Vec::new(),
        }
    }

    /// Attach a log group.
    #[must_use]
    pub fn with_group(mut self, group_name: &str) -> Self {
        self.group_name = Some(group_name.to_string());
        self
    }

    /// Append children, keeping their order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Group name if present and non-empty
    #[must_use]
    pub fn log_group(&self) -> Option<&str> {
        self.group_name.as_deref().filter(|g| !g.is_empty())
    }
}

/// Durations come either as `{"secs": .., "nanos": ..}` or as plain seconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Parts {
        secs: u64,
        #[serde(default)]
        nanos: u32,
    },
    Seconds(f64),
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match DurationRepr::deserialize(deserializer)? {
        DurationRepr::Parts { secs, nanos } => Duration::from_secs(secs)
            .checked_add(Duration::from_nanos(nanos.into()))
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "duration overflows: {secs}s + {nanos}ns"
                ))
            }),
        DurationRepr::Seconds(secs) => Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(format!(
                "duration must be a finite, non-negative number of seconds, got {secs}"
            ))
        }),
    }
}
