use serde_json::Value;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{0}` can't be resolved to a local file.")]
    InvalidLocator(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The response body carried a truthy `error` field. Holds the decoded body unchanged.
    #[error("The loaded content reported an error: {body}")]
    Fetch { body: Value },
    /// Status `0` means no response arrived, either because the transport failed (`cause`) or
    /// because it was still waiting when the timeout ran out.
    #[error("The request ended with status {status} and was abandoned after {waited:?}.")]
    Stalled {
        status: u16,
        waited: Duration,
        #[source]
        cause: Option<TransportError>,
    },
}
