use crate::{LanguageModelInput, LanguageModelResult, ModelResponse};

/// The completion function every EventOS workflow talks to.
///
/// Implementations are expected to be slow and fallible; callers decide
/// whether a failure degrades to a local fallback or is surfaced.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse>;
}
