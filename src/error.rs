use reqwest::StatusCode;
use thiserror::Error;

/// Failures the product source can surface. The catalog loader downgrades
/// all of them to an empty category snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    Status { status: StatusCode, url: String },
}
