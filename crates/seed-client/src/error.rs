//! Error type for seed fetches

use thiserror::Error;

/// Errors produced while fetching seed data.
///
/// The application treats every variant the same way (log and leave the
/// list empty), but the distinction helps the log reader.
#[derive(Debug, Error)]
pub enum SeedClientError {
    /// Transport-level failure (DNS, TLS, connection reset, body decode)
    #[error("seed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code
    #[error("seed endpoint returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}
