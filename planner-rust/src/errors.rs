use std::time::Duration;
use thiserror::Error;

/// Why a remote completion could not be turned into a usable artifact.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No model (and therefore no API credential) is configured.
    #[error("No language model is configured for this workflow")]
    MissingCredential,
    #[error("Language model error: {0}")]
    LanguageModel(#[from] eventos_llm::LanguageModelError),
    #[error("The language model did not respond within {0:?}")]
    Timeout(Duration),
    #[error("The language model returned an empty response")]
    EmptyResponse,
    #[error("Failed to parse model output: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Model output has an unexpected shape: {0}")]
    Shape(#[from] ShapeError),
}

/// A structural invariant of a generated artifact that does not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} {section}, found {actual}")]
    Count {
        section: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("budget line {category:?} has percentage {percentage}, expected 0 to 100")]
    PercentageOutOfRange { category: String, percentage: u32 },
    #[error("budget percentages sum to {0}, expected 100")]
    PercentageSum(u32),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Messages required")]
    EmptyHistory,
    #[error(transparent)]
    Completion(#[from] GenerationError),
}

/// Rejection of a questionnaire before any external call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),
}
