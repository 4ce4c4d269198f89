use thiserror::Error;

/// Failure of a single completion call.
#[derive(Error, Debug)]
pub enum LanguageModelError {
    /// The input cannot be sent (no messages, malformed header values).
    #[error("Invalid completion input: {0}")]
    InvalidInput(String),
    /// Connection, TLS or body decoding failure.
    #[error("Completion transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-2xx status; carries the raw body.
    #[error("Completion endpoint returned {0}: {1}")]
    StatusCode(reqwest::StatusCode, String),
    /// The provider answered 2xx with something unusable, e.g. no choices.
    #[error("Unexpected response from {0}: {1}")]
    Invariant(&'static str, String),
    #[error("Model refused the request: {0}")]
    Refusal(String),
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;
