use thiserror::Error;

/// What went wrong during a single request/response cycle with the assistant
/// backend. Every variant is recovered locally by the session's fallback
/// mapping; none of them are fatal to the UI.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The endpoint could not be reached or the connection failed mid-flight.
    #[error("request to assistant endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("assistant endpoint returned {status}: {body}")]
    Endpoint {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The endpoint answered 2xx but the body did not match the contract.
    #[error("malformed response from assistant endpoint: {0}")]
    Malformed(String),
}
