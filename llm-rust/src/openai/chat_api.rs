use serde::{Deserialize, Serialize};

// https://platform.openai.com/docs/api-reference/chat

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CreateChatCompletionRequest {
    /// Model ID used to generate the response, like `gpt-4o` or `o3`.
    pub model: String,

    /// A list of messages comprising the conversation so far.
    pub messages: Vec<ChatCompletionRequestMessage>,

    /// An upper bound for the number of tokens that can be generated for a
    /// completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,

    /// What sampling temperature to use, between 0 and 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatCompletionRequestMessage {
    System(ChatCompletionRequestTextMessage),
    User(ChatCompletionRequestTextMessage),
    Assistant(ChatCompletionRequestTextMessage),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequestTextMessage {
    /// The contents of the message.
    pub content: String,
}

/// Represents a chat completion response returned by model, based on the
/// provided input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatCompletionResponse {
    /// A unique identifier for the chat completion.
    #[serde(default)]
    pub id: String,

    /// A list of chat completion choices. Can be more than one if `n` is
    /// greater than 1.
    pub choices: Vec<ChatCompletionChoice>,

    /// The model used for the chat completion.
    #[serde(default)]
    pub model: String,

    /// Usage statistics for the completion request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    /// The reason the model stopped generating tokens.
    #[serde(default)]
    pub finish_reason: Option<String>,

    /// The index of the choice in the list of choices.
    #[serde(default)]
    pub index: u32,

    /// A chat completion message generated by the model.
    pub message: ChatCompletionResponseMessage,
}

/// A chat completion message generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponseMessage {
    /// The contents of the message.
    pub content: Option<String>,

    /// The refusal message generated by the model.
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Usage statistics for the completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionUsage {
    /// Number of tokens in the generated completion.
    pub completion_tokens: u32,

    /// Number of tokens in the prompt.
    pub prompt_tokens: u32,

    /// Total number of tokens used in the request (prompt + completion).
    #[serde(default)]
    pub total_tokens: u32,
}
