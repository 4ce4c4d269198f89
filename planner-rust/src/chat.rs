use crate::{
    completion::{complete, SharedModel},
    ChatError, CompletionParams, GenerationError,
};
use eventos_llm::{Message, ModelUsage};
use serde::{Deserialize, Serialize};

const GENERIC_SYSTEM_PROMPT: &str = "You are an AI assistant for EventOS, an event management \
platform. Help users with event planning, management, and optimization. Be concise and actionable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for Message {
    fn from(message: &ChatMessage) -> Self {
        let content = [message.content.as_str()];
        match message.role {
            ChatRole::User => Self::user(content),
            ChatRole::Assistant => Self::assistant(content),
        }
    }
}

/// The event the user is looking at while chatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    #[serde(default)]
    pub attendees: u32,
    /// Live sessions.
    #[serde(default)]
    pub sessions: u32,
    #[serde(default)]
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ModelUsage>,
}

/// Stateless relay between the dashboard assistant and the language model.
/// The caller owns the conversation history.
pub struct ChatRelay {
    model: Option<SharedModel>,
    params: CompletionParams,
}

impl ChatRelay {
    #[must_use]
    pub fn new(model: Option<SharedModel>) -> Self {
        Self {
            model,
            params: CompletionParams::CHAT,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Send `history` (ending with the new user message) and return the
    /// first choice's text verbatim. Failures are surfaced, never replaced.
    pub async fn relay(
        &self,
        history: &[ChatMessage],
        context: Option<&EventContext>,
    ) -> Result<ChatReply, ChatError> {
        if history.is_empty() {
            return Err(ChatError::EmptyHistory);
        }

        let response = complete(
            self.model.as_ref(),
            &self.params,
            system_prompt(context),
            history.iter().map(Message::from).collect(),
        )
        .await?;

        let message = response.text();
        if message.is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }

        Ok(ChatReply {
            message,
            usage: response.usage,
        })
    }
}

fn system_prompt(context: Option<&EventContext>) -> String {
    let Some(context) = context else {
        return GENERIC_SYSTEM_PROMPT.to_string();
    };

    format!(
        "You are an AI assistant for EventOS, helping with event management.
Current Event Context:
- Event: {name} ({kind})
- Status: {status}
- Attendees: {attendees}
- Live Sessions: {sessions}
- Progress: {progress}%

You help event organizers with:
- Event planning and logistics
- Attendee management
- Vendor coordination
- Schedule optimization
- Problem-solving
- Best practices

Be concise, actionable, and professional. Provide specific recommendations when possible.",
        name = context.name,
        kind = context.event_type,
        status = context.status,
        attendees = context.attendees,
        sessions = context.sessions,
        progress = context.progress,
    )
}
