//! Kibana short links
//!
//! Asks the dashboard's `/api/shorten_url` endpoint for a short id and falls
//! back to the long query URL on any failure.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{LinkOutcome, LinkResolver};
use crate::config::LinkConfig;

#[derive(Debug, Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    #[serde(rename = "urlId")]
    url_id: Option<String>,
}

/// Link resolver backed by the Kibana URL shortener
#[derive(Debug, Clone)]
pub struct KibanaLinks {
    client: reqwest::Client,
    config: LinkConfig,
}

impl KibanaLinks {
    /// Create a resolver for the dashboard described by `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: LinkConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Request a short id for the logs of `group` and build its redirect URL.
    async fn shorten(&self, group: &str) -> Result<String> {
        let logs_path = self.config.logs_path(group);
        let response = self
            .client
            .post(self.config.shorten_endpoint())
            .header("kbn-xsrf", "true")
            .json(&ShortenRequest { url: &logs_path })
            .send()
            .await
            .context("Failed to send shorten request")?
            .error_for_status()
            .context("Shorten request was rejected")?;

        let body: ShortenResponse = response
            .json()
            .await
            .context("Failed to parse shorten response")?;
        let url_id = body
            .url_id
            .context("Shorten response has no 'urlId' field")?;

        Ok(self.config.goto_url(&url_id))
    }
}

impl LinkResolver for KibanaLinks {
    async fn resolve(&self, group: &str) -> LinkOutcome {
        match self.shorten(group).await {
            Ok(url) => {
                debug!(group, %url, "shortened node logs link");
                LinkOutcome::Shortened(url)
            }
            Err(e) => {
                error!(group, "Error while sending a request to Kibana: {e:#}");
                LinkOutcome::Fallback(self.config.long_url(group))
            }
        }
    }
}
