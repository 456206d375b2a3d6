//! wp-json discovery document fetcher
//!
//! Issues a single GET against `<target>/wp-json` and hands back the raw body.

use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Path appended to every target
const WP_JSON_SUFFIX: &str = "/wp-json";

/// Allowed URL schemes
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Build the discovery document URL for a target
///
/// Trailing slashes are trimmed before `/wp-json` is appended. Targets
/// without a scheme default to `https://`.
pub fn endpoint_url(target: &str) -> Result<Url> {
    let target = target.trim();
    if target.is_empty() {
        return Err(Error::InvalidUrl("empty target".to_string()));
    }

    let with_scheme = if !target.contains("://") {
        format!("https://{}", target)
    } else {
        target.to_string()
    };

    let url = format!("{}{}", with_scheme.trim_end_matches('/'), WP_JSON_SUFFIX);
    let url = Url::parse(&url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(Error::InvalidUrl(format!(
            "scheme '{}' not allowed (use http or https)",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Fetches wp-json documents
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

/// Builder for configuring a Fetcher with options
#[derive(Debug, Default)]
pub struct FetcherBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl FetcherBuilder {
    /// Create a builder with client defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the request timeout (unset: no client-level timeout)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send a User-Agent header (unset: none is sent)
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the Fetcher with the configured options
    pub fn build(self) -> Result<Fetcher> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Fetcher { client })
    }
}

impl Fetcher {
    /// Create a fetcher with default client settings
    pub fn new() -> Result<Self> {
        FetcherBuilder::new().build()
    }

    /// Create a builder for configuring fetcher options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use wpjson_scrape::Fetcher;
    ///
    /// let fetcher = Fetcher::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), wpjson_scrape::Error>(())
    /// ```
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// Fetch the discovery document for `target` and return its body
    ///
    /// Non-2xx statuses are not errors here; the body is returned as-is and
    /// decoding decides whether it is usable.
    pub async fn fetch(&self, target: &str) -> Result<Vec<u8>> {
        let url = endpoint_url(target)?;
        debug!(%url, "fetching discovery document");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| Error::HttpRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success status, decoding body anyway");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::HttpRequest(e.to_string()))?;

        debug!(%url, bytes = body.len(), "response body read");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_wp_json() {
        let url = endpoint_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/wp-json");
    }

    #[test]
    fn trims_trailing_slashes() {
        let url = endpoint_url("https://example.com///").unwrap();
        assert_eq!(url.as_str(), "https://example.com/wp-json");
    }

    #[test]
    fn keeps_subdirectory_install() {
        let url = endpoint_url("http://example.com/blog/").unwrap();
        assert_eq!(url.as_str(), "http://example.com/blog/wp-json");
    }

    #[test]
    fn defaults_to_https() {
        let url = endpoint_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/wp-json");
    }

    #[test]
    fn reject_empty_target() {
        assert!(endpoint_url("   ").is_err());
    }

    #[test]
    fn reject_ftp_scheme() {
        let result = endpoint_url("ftp://example.com");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scheme"));
    }

    #[test]
    fn invalid_target_fails_before_request() {
        let fetcher = Fetcher::new().unwrap();
        let err = tokio_test::block_on(fetcher.fetch("file:///etc/passwd")).unwrap_err();
        assert!(err.is_network());
    }
}
