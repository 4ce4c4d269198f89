use eventos_llm::{
    testing::{MockGenerateResult, MockLanguageModel},
    LanguageModelError,
};
use eventos_planner::{
    EventDetails, EventPlanner, QuestionnaireAnswers, Source, GENERIC_DESCRIPTION,
};
use std::{sync::Arc, time::Duration};

fn workshop() -> EventDetails {
    EventDetails {
        event_type: "workshop".to_string(),
        duration: "half-day".to_string(),
        attendees: "40".to_string(),
        goals: "Hands-on Rust training.".to_string(),
    }
}

#[tokio::test]
async fn description_uses_model_text_trimmed() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(MockGenerateResult::text(
        "\nA half-day hands-on workshop for 40 engineers.  ",
    ));

    let planner = EventPlanner::builder().description_model(model.clone()).build();
    let generated = planner.describe_event(&workshop()).await;

    assert_eq!(generated.source, Source::Remote);
    assert_eq!(
        generated.value,
        "A half-day hands-on workshop for 40 engineers."
    );

    let input = &model.tracked_generate_inputs()[0];
    assert_eq!(input.max_tokens, Some(150));
    assert_eq!(input.temperature, Some(0.8));
    assert!(input.messages[0].text().contains("Keep it under 3 sentences."));
}

#[tokio::test]
async fn description_falls_back_to_template_on_failure() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::Refusal("no".to_string()));

    let planner = EventPlanner::builder().description_model(model).build();
    let generated = planner.describe_event(&workshop()).await;

    assert_eq!(generated.source, Source::Fallback);
    assert_eq!(
        generated.value,
        "workshop event for 40 attendees. Hands-on Rust training."
    );
}

#[tokio::test]
async fn blank_description_becomes_generic_line() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(MockGenerateResult::text("   "));

    let planner = EventPlanner::builder().description_model(model).build();
    let generated = planner.describe_event(&workshop()).await;

    assert!(generated.is_fallback());
    assert_eq!(generated.value, GENERIC_DESCRIPTION);
}

#[tokio::test]
async fn shared_model_serves_every_workflow() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate_results([
        MockGenerateResult::text("not json"),
        MockGenerateResult::text("A product launch for 300 guests."),
    ]);

    let planner = EventPlanner::builder()
        .model(model.clone())
        .timeout(Duration::from_secs(5))
        .build();

    let blueprint = planner
        .generate_blueprint(&QuestionnaireAnswers {
            event_name: "Launch".to_string(),
            event_type: "product-launch".to_string(),
            attendees: "300".to_string(),
            budget: "80000".to_string(),
            ..QuestionnaireAnswers::default()
        })
        .await;
    assert!(blueprint.is_fallback());
    assert_eq!(blueprint.value.event_name, "Launch");

    let description = planner.describe_event(&workshop()).await;
    assert_eq!(description.source, Source::Remote);

    let inputs = model.tracked_generate_inputs();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].max_tokens, Some(2000));
    assert_eq!(inputs[1].max_tokens, Some(150));
}

#[tokio::test]
async fn unconfigured_planner_answers_from_fallbacks() {
    let planner = EventPlanner::builder().build();

    let description = planner.describe_event(&workshop()).await;
    assert!(description.is_fallback());
    assert_eq!(
        description.value,
        "workshop event for 40 attendees. Hands-on Rust training."
    );
}
