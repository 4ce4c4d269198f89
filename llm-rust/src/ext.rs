use crate::{AssistantMessage, Message, ModelResponse, Part, TextPart, UserMessage};

impl From<&str> for TextPart {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_string(),
        }
    }
}

impl From<String> for TextPart {
    fn from(value: String) -> Self {
        Self { text: value }
    }
}

impl From<TextPart> for Part {
    fn from(value: TextPart) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Part {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Part {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart { text: text.into() })
    }
}

impl UserMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserMessage> for Message {
    fn from(value: UserMessage) -> Self {
        Self::User(value)
    }
}

impl AssistantMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AssistantMessage> for Message {
    fn from(value: AssistantMessage) -> Self {
        Self::Assistant(value)
    }
}

impl Message {
    pub fn user<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::User(UserMessage::new(parts))
    }

    pub fn assistant<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::Assistant(AssistantMessage::new(parts))
    }

    /// Concatenated text of every text part in the message.
    #[must_use]
    pub fn text(&self) -> String {
        let parts = match self {
            Self::User(message) => &message.content,
            Self::Assistant(message) => &message.content,
        };
        join_text(parts)
    }
}

impl ModelResponse {
    /// Concatenated text of every text part in the response.
    #[must_use]
    pub fn text(&self) -> String {
        join_text(&self.content)
    }
}

fn join_text(parts: &[Part]) -> String {
    parts
        .iter()
        .map(|part| match part {
            Part::Text(text_part) => text_part.text.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts_in_order() {
        let response = ModelResponse {
            content: vec![Part::text("Hello, "), Part::text("world")],
            usage: None,
        };
        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn message_helpers_wrap_text_parts() {
        let message = Message::user(["plan my event"]);
        assert_eq!(
            message,
            Message::User(UserMessage {
                content: vec![Part::text("plan my event")],
            })
        );
        assert_eq!(message.text(), "plan my event");
    }
}
