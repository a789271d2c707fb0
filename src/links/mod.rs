//! Node log links
//!
//! Resolves a pot's log group into a URL for the report. Resolution never
//! fails: when a short link cannot be obtained the long-form URL is used.

pub mod kibana;

use std::fmt;
use std::future::Future;

pub use kibana::KibanaLinks;

/// Link produced for a log group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The shortener returned an id; holds the redirect URL
    Shortened(String),
    /// Shortening failed; holds the long-form URL
    Fallback(String),
}

impl LinkOutcome {
    /// URL to display, whichever way it was obtained
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Shortened(url) | Self::Fallback(url) => url,
        }
    }

    /// Returns true if the link was shortened
    #[must_use]
    pub const fn is_shortened(&self) -> bool {
        matches!(self, Self::Shortened(_))
    }
}

impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

/// Produces a display link for a log group
pub trait LinkResolver {
    /// Resolve `group` into a link. Implementations must not fail.
    fn resolve(&self, group: &str) -> impl Future<Output = LinkOutcome>;
}
