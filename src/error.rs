use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single HTTP GET.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    /// Only timeouts are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

#[derive(Error, Debug)]
#[error("invalid selector `{css}`: {message}")]
pub struct SelectorError {
    pub css: &'static str,
    pub message: String,
}

/// Fatal for the whole run: without the listing there is nothing to report.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("network error while fetching the listing page: {0}")]
    Network(#[from] FetchError),

    #[error("could not parse the listing page: {0}")]
    Parse(#[from] SelectorError),
}

/// Recovered per line by substituting a placeholder report.
#[derive(Error, Debug)]
pub enum DetailError {
    #[error("fetching detail for {line} failed: {source}")]
    FetchFailed {
        line: String,
        #[source]
        source: FetchError,
    },

    #[error("no detail text found for {line}")]
    DetailNotFound { line: String },
}
