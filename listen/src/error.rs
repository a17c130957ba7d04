use thiserror::Error;

/// Failure surface of the transcription boundary.
///
/// Every public entry point returns one of these; transport problems,
/// remote-reported errors, and malformed bodies stay distinguishable and
/// nothing escapes as a panic.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Transport-level failure: connect, timeout, or body read.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with an error payload, carried verbatim.
    #[error("service error: {0}")]
    Service(String),

    /// The response body was not the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Credentials are missing or unusable.
    #[error("credentials: {0}")]
    Credentials(String),
}

pub fn from_reqwest_error(details: impl AsRef<str>, err: reqwest::Error) -> TranscribeError {
    if err.is_timeout() {
        TranscribeError::Network(format!("{}: timeout", details.as_ref()))
    } else if err.is_connect() {
        TranscribeError::Network(format!("{}: connection failed", details.as_ref()))
    } else {
        TranscribeError::Network(format!("{}: {err}", details.as_ref()))
    }
}
