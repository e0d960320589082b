//! Error types for the metadata source.

use thiserror::Error;

/// A failure fetching or decoding a payload from the task metadata endpoint.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request itself failed (connection refused, timeout, ...).
    #[error("GET {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status code.
    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON of the expected shape.
    #[error("decoding response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
