//! Report and link configuration
//!
//! Everything the summary needs is passed in explicitly through these types.

use std::time::Duration;

/// Base URL of the log dashboard hosting node logs
pub const KIBANA_BASE_URL: &str = "https://kibana.testnet.dfinity.systems";

/// Dashboard query for all records tagged with a log group, newest first,
/// over the past year. `{group}` is replaced by the group name.
pub const NODE_LOGS_TEMPLATE: &str = "/app/kibana#/discover?_g=(time:(from:now-1y,to:now))&_a=(columns:!(_source),index:c8cf8e20-593f-11ec-9f11-0fb8445c6897,interval:auto,query:(language:kuery,query:'tags:%22{group}%22'),sort:!(!('@timestamp',desc)))";

/// Options controlling which pots are detailed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Detail every pot instead of only failing ones
    pub verbose: bool,
}

impl ReportConfig {
    /// Create a report configuration.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// Where node log links point and how the shortener is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Dashboard base URL, without a trailing slash
    pub base_url: String,
    /// Query template appended to `base_url`
    pub logs_template: String,
    /// Request timeout for the shortener; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: KIBANA_BASE_URL.to_string(),
            logs_template: NODE_LOGS_TEMPLATE.to_string(),
            timeout: None,
        }
    }
}

impl LinkConfig {
    /// Point links at a different dashboard.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound the shortener request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Dashboard path querying the logs of `group`
    #[must_use]
    pub fn logs_path(&self, group: &str) -> String {
        self.logs_template.replace("{group}", group)
    }

    /// Full URL of the logs query for `group`
    #[must_use]
    pub fn long_url(&self, group: &str) -> String {
        format!("{}{}", self.base_url, self.logs_path(group))
    }

    /// Endpoint that shortens dashboard URLs
    #[must_use]
    pub fn shorten_endpoint(&self) -> String {
        format!("{}/api/shorten_url", self.base_url)
    }

    /// Redirect URL for a shortened link id
    #[must_use]
    pub fn goto_url(&self, url_id: &str) -> String {
        format!("{}/goto/{url_id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_default_is_not_verbose() {
        assert!(!ReportConfig::default().verbose);
        assert!(ReportConfig::new(true).verbose);
    }

    #[test]
    fn test_long_url_substitutes_group() {
        let config = LinkConfig::default();
        let url = config.long_url("g1");

        assert!(url.starts_with("https://kibana.testnet.dfinity.systems/app/kibana#/discover"));
        assert!(url.contains("query:'tags:%22g1%22'"));
        assert!(url.contains("time:(from:now-1y,to:now)"));
        assert!(url.contains("sort:!(!('@timestamp',desc))"));
        assert!(!url.contains("{group}"));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = LinkConfig::default().with_base_url("http://127.0.0.1:9200/");
        assert_eq!(config.base_url, "http://127.0.0.1:9200");
        assert_eq!(
            config.shorten_endpoint(),
            "http://127.0.0.1:9200/api/shorten_url"
        );
        assert_eq!(config.goto_url("abc"), "http://127.0.0.1:9200/goto/abc");
    }

    #[test]
    fn test_with_timeout() {
        let config = LinkConfig::default().with_timeout(Duration::from_millis(50));
        assert_eq!(config.timeout, Some(Duration::from_millis(50)));
        assert_eq!(LinkConfig::default().timeout, None);
    }
}
