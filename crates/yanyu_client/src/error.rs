use thiserror::Error;

/// Errors that can occur while fetching learner or catalogue data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
