use crate::{
    completion::{complete_text, strip_code_fences, Generated, SharedModel},
    synthesize_blueprint, Blueprint, CompletionParams, GenerationError, QuestionnaireAnswers,
};

const SYSTEM_PROMPT: &str = "You are an expert event planning AI assistant. Provide detailed, \
actionable event blueprints in valid JSON format only.";

/// Turns a questionnaire into a [`Blueprint`], trying the language model
/// first and synthesizing locally when that fails.
pub struct BlueprintGenerator {
    model: Option<SharedModel>,
    params: CompletionParams,
}

impl BlueprintGenerator {
    #[must_use]
    pub fn new(model: Option<SharedModel>) -> Self {
        Self {
            model,
            params: CompletionParams::BLUEPRINT,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Always returns a fully populated blueprint. Every remote failure
    /// (missing model, transport, timeout, unparsable or misshapen output)
    /// collapses to [`synthesize_blueprint`]. One attempt, no retry.
    pub async fn generate(&self, answers: &QuestionnaireAnswers) -> Generated<Blueprint> {
        match self.request(answers).await {
            Ok(blueprint) => Generated::remote(blueprint),
            Err(error) => {
                tracing::warn!(
                    event_name = %answers.event_name,
                    %error,
                    "blueprint generation failed, using synthesized blueprint"
                );
                Generated::fallback(synthesize_blueprint(answers))
            }
        }
    }

    /// The remote strategy on its own.
    pub async fn request(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<Blueprint, GenerationError> {
        let text = complete_text(
            self.model.as_ref(),
            &self.params,
            SYSTEM_PROMPT,
            render_prompt(answers),
        )
        .await?;

        parse_blueprint(&text)
    }
}

/// Strict parse of model output, including the shape check.
pub fn parse_blueprint(text: &str) -> Result<Blueprint, GenerationError> {
    let blueprint: Blueprint = serde_json::from_str(strip_code_fences(text))?;
    blueprint.check_shape()?;
    Ok(blueprint)
}

fn render_prompt(answers: &QuestionnaireAnswers) -> String {
    format!(
        r#"You are an expert event planner. Create a detailed event blueprint based on these details:

Event Name: {name}
Event Type: {kind}
Expected Attendees: {attendees}
Budget: ${budget}
Duration: {duration}
Goals: {goals}

Generate a comprehensive event blueprint with the following sections:
1. Timeline with 5 phases (pre-planning, planning, execution, event day, post-event) - each with specific tasks
2. Budget breakdown across 6 categories with percentages that add up to 100
3. 4 vendor categories with specific company suggestions and estimated costs
4. Venue requirements (layout, capacity, features)
5. 8 marketing strategies
6. 5 potential risks with mitigation strategies

Respond with JSON only, using this exact structure:
{{
  "eventName": "event name",
  "eventType": "type",
  "timeline": [{{"phase": "name", "duration": "timeframe", "tasks": ["task1", "task2"]}}],
  "budget": [{{"category": "name", "amount": "$X", "percentage": Y}}],
  "vendors": [{{"type": "category", "recommendations": ["vendor1", "vendor2"], "estimated": "$X"}}],
  "venue": {{"layout": "description", "capacity": "number", "features": ["feature1"]}},
  "marketing": ["strategy1", "strategy2"],
  "risks": [{{"risk": "description", "mitigation": "solution"}}]
}}"#,
        name = answers.event_name,
        kind = answers.event_type,
        attendees = answers.attendees,
        budget = answers.budget,
        duration = answers.duration,
        goals = answers.goals,
    )
}
