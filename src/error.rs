//! Errors for reading the upstream HTTP endpoints.
//!
//! Everything else is reported via `anyhow` with context.
//! These are kept as distinct kinds so a caller can tell a hanging upstream apart from a failing one.
//!
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint did not answer within the configured timeout.
    #[error("upstream timeout: {url} did not respond within {timeout:?}")]
    UpstreamTimeout {
        url: String,
        timeout: Duration,
    },
    /// The endpoint answered, but not with a success status.
    #[error("upstream error: {url} returned {status}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("upstream request failed: {url}: {source}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn from_reqwest(
        url: &str,
        timeout: Duration,
        error: reqwest::Error,
    ) -> Self
    {
        if error.is_timeout() {
            FetchError::UpstreamTimeout { url: url.to_string(), timeout }
        } else {
            FetchError::Upstream { url: url.to_string(), source: error }
        }
    }
}
