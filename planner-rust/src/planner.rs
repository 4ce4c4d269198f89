use crate::{
    completion::{Generated, SharedModel},
    Blueprint, BlueprintGenerator, ChatError, ChatMessage, ChatRelay, ChatReply, CompletionParams,
    DescriptionWriter, EventContext, EventDetails, EventSnapshot, Insight, InsightGenerator,
    QuestionnaireAnswers,
};
use std::time::Duration;

/// The four AI workflows behind the dashboard. Each one is independent and
/// may be called concurrently.
pub struct EventPlanner {
    pub blueprints: BlueprintGenerator,
    pub insights: InsightGenerator,
    pub chat: ChatRelay,
    pub descriptions: DescriptionWriter,
}

impl EventPlanner {
    #[must_use]
    pub fn new(params: PlannerParams) -> Self {
        let PlannerParams {
            blueprint_model,
            insights_model,
            chat_model,
            description_model,
            timeout,
        } = params;

        Self {
            blueprints: BlueprintGenerator::new(blueprint_model)
                .with_params(CompletionParams::BLUEPRINT.timeout(timeout)),
            insights: InsightGenerator::new(insights_model)
                .with_params(CompletionParams::INSIGHTS.timeout(timeout)),
            chat: ChatRelay::new(chat_model).with_params(CompletionParams::CHAT.timeout(timeout)),
            descriptions: DescriptionWriter::new(description_model)
                .with_params(CompletionParams::DESCRIPTION.timeout(timeout)),
        }
    }

    #[must_use]
    pub fn builder() -> PlannerParams {
        PlannerParams::default()
    }

    pub async fn generate_blueprint(&self, answers: &QuestionnaireAnswers) -> Generated<Blueprint> {
        self.blueprints.generate(answers).await
    }

    pub async fn generate_insights(&self, snapshot: &EventSnapshot) -> Generated<Vec<Insight>> {
        self.insights.generate(snapshot).await
    }

    pub async fn relay_chat(
        &self,
        history: &[ChatMessage],
        context: Option<&EventContext>,
    ) -> Result<ChatReply, ChatError> {
        self.chat.relay(history, context).await
    }

    pub async fn describe_event(&self, details: &EventDetails) -> Generated<String> {
        self.descriptions.describe(details).await
    }
}

/// Parameters required to create an [`EventPlanner`].
/// # Default Values
/// - every model: `None`, which makes the workflow behave as if the API
///   credential were missing
/// - `timeout`: 60 seconds
pub struct PlannerParams {
    pub blueprint_model: Option<SharedModel>,
    pub insights_model: Option<SharedModel>,
    pub chat_model: Option<SharedModel>,
    pub description_model: Option<SharedModel>,
    /// Upper bound on each completion call.
    pub timeout: Duration,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            blueprint_model: None,
            insights_model: None,
            chat_model: None,
            description_model: None,
            timeout: crate::params::DEFAULT_TIMEOUT,
        }
    }
}

impl PlannerParams {
    /// Use the same model for every workflow
    #[must_use]
    pub fn model(self, model: SharedModel) -> Self {
        self.blueprint_model(model.clone())
            .insights_model(model.clone())
            .chat_model(model.clone())
            .description_model(model)
    }

    #[must_use]
    pub fn blueprint_model(mut self, model: SharedModel) -> Self {
        self.blueprint_model = Some(model);
        self
    }

    #[must_use]
    pub fn insights_model(mut self, model: SharedModel) -> Self {
        self.insights_model = Some(model);
        self
    }

    #[must_use]
    pub fn chat_model(mut self, model: SharedModel) -> Self {
        self.chat_model = Some(model);
        self
    }

    #[must_use]
    pub fn description_model(mut self, model: SharedModel) -> Self {
        self.description_model = Some(model);
        self
    }

    /// Set the per-call timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn build(self) -> EventPlanner {
        EventPlanner::new(self)
    }
}
