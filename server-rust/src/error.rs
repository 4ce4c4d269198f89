use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventos_planner::{ChatError, GenerationError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Every failure an endpoint can report. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
    #[error("Event data required")]
    MissingEventData,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Chat(#[from] ChatError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::MissingEventData | Self::Validation(_) | Self::Chat(ChatError::EmptyHistory) => {
                StatusCode::BAD_REQUEST
            }
            Self::Chat(ChatError::Completion(GenerationError::MissingCredential)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Chat(ChatError::Completion(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::Chat(ChatError::Completion(GenerationError::MissingCredential)) => {
                "OpenAI API key not configured".to_string()
            }
            Self::Chat(ChatError::Completion(_)) => "Failed to generate response".to_string(),
            Self::MissingEventData | Self::Validation(_) | Self::Chat(ChatError::EmptyHistory) => {
                self.to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
