//! Error types for wpjson-scrape

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scraping a wp-json discovery document
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid target URL provided
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to create HTTP client
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),

    /// HTTP request failed (DNS, connection, transport)
    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    /// Response body is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A value stored under an `href` key is not a string
    #[error("href value at '{path}' is not a string")]
    NonStringHref { path: String },

    /// The target list could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    InputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result file could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output operation failed
    #[error("output failed: {0}")]
    OutputFailed(#[source] std::io::Error),

    /// JSON serialization failed
    #[error("JSON serialization failed")]
    SerializationFailed(#[from] serde_json::Error),
}

impl Error {
    /// The request never produced a response body
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::HttpClient(_) | Self::HttpRequest(_)
        )
    }

    /// A response body arrived but could not be turned into a result
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::InvalidJson(_) | Self::NonStringHref { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_errors() {
        assert!(Error::HttpRequest("refused".to_string()).is_network());
        assert!(!Error::HttpRequest("refused".to_string()).is_decode());

        let href = Error::NonStringHref {
            path: "/_links/self".to_string(),
        };
        assert!(href.is_decode());
        assert!(!href.is_network());
        assert!(href.to_string().contains("/_links/self"));
    }
}
