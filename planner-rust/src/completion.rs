use crate::{CompletionParams, GenerationError};
use eventos_llm::{LanguageModel, LanguageModelInput, Message, ModelResponse};
use serde::Serialize;
use std::sync::Arc;

/// A language model shared between workflows and requests.
pub type SharedModel = Arc<dyn LanguageModel + Send + Sync>;

/// Which strategy produced a workflow result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Parsed from the language model's output.
    Remote,
    /// Computed locally after the remote attempt failed.
    Fallback,
}

/// A workflow result tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Generated<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            source: Source::Remote,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Issue exactly one bounded completion call.
pub(crate) async fn complete(
    model: Option<&SharedModel>,
    params: &CompletionParams,
    system_prompt: String,
    messages: Vec<Message>,
) -> Result<ModelResponse, GenerationError> {
    let model = model.ok_or(GenerationError::MissingCredential)?;

    let input = LanguageModelInput {
        system_prompt: Some(system_prompt),
        messages,
        max_tokens: Some(params.max_tokens),
        temperature: Some(params.temperature),
    };

    tracing::debug!(
        provider = model.provider(),
        model = %model.model_id(),
        max_tokens = params.max_tokens,
        "requesting completion"
    );

    let response = tokio::time::timeout(params.timeout, model.generate(input))
        .await
        .map_err(|_| GenerationError::Timeout(params.timeout))??;

    Ok(response)
}

/// Like [`complete`], for a single user prompt whose reply must be non-blank.
pub(crate) async fn complete_text(
    model: Option<&SharedModel>,
    params: &CompletionParams,
    system_prompt: &str,
    prompt: String,
) -> Result<String, GenerationError> {
    let response = complete(
        model,
        params,
        system_prompt.to_string(),
        vec![Message::user([prompt])],
    )
    .await?;

    let text = response.text();
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

/// Remove the Markdown code fence models sometimes wrap JSON in.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (`json`) that follows the opening fence.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches("json"),
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
