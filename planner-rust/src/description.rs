use crate::{
    completion::{complete_text, Generated, SharedModel},
    CompletionParams, GenerationError,
};
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str =
    "You are an event planning assistant. Generate professional event descriptions.";

pub const GENERIC_DESCRIPTION: &str = "Professional event hosted via EventOS platform.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    #[serde(rename = "type")]
    pub event_type: String,
    pub duration: String,
    pub attendees: String,
    pub goals: String,
}

/// Writes the short description shown on an event's public page.
pub struct DescriptionWriter {
    model: Option<SharedModel>,
    params: CompletionParams,
}

impl DescriptionWriter {
    #[must_use]
    pub fn new(model: Option<SharedModel>) -> Self {
        Self {
            model,
            params: CompletionParams::DESCRIPTION,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Never fails. A blank reply yields a generic line, any other failure
    /// produces [`template_description`].
    pub async fn describe(&self, details: &EventDetails) -> Generated<String> {
        match self.request(details).await {
            Ok(text) => Generated::remote(text),
            Err(GenerationError::EmptyResponse) => {
                Generated::fallback(GENERIC_DESCRIPTION.to_string())
            }
            Err(error) => {
                tracing::warn!(%error, "description generation failed, using template");
                Generated::fallback(template_description(details))
            }
        }
    }

    pub async fn request(&self, details: &EventDetails) -> Result<String, GenerationError> {
        let text = complete_text(
            self.model.as_ref(),
            &self.params,
            SYSTEM_PROMPT,
            render_prompt(details),
        )
        .await?;
        Ok(text.trim().to_string())
    }
}

#[must_use]
pub fn template_description(details: &EventDetails) -> String {
    format!(
        "{} event for {} attendees. {}",
        details.event_type, details.attendees, details.goals
    )
}

fn render_prompt(details: &EventDetails) -> String {
    format!(
        "Generate a concise event description for:
Type: {}
Duration: {}
Expected Attendees: {}
Goals: {}

Keep it under 3 sentences.",
        details.event_type, details.duration, details.attendees, details.goals
    )
}
