use thiserror::Error;

/// Failure of a single request against the statistics service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not complete (DNS, connection, body read)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}
