use eventos_llm::{
    testing::{MockGenerateResult, MockLanguageModel},
    LanguageModel, LanguageModelError, LanguageModelInput, Message,
};

#[tokio::test]
async fn mock_yields_results_in_order_and_tracks_inputs() {
    let model = MockLanguageModel::new();
    model
        .enqueue_generate(MockGenerateResult::text("first"))
        .enqueue_generate(LanguageModelError::Refusal("no".to_string()));

    let input = LanguageModelInput {
        messages: vec![Message::user(["hello"])],
        ..Default::default()
    };

    let first = model.generate(input.clone()).await.expect("first result");
    assert_eq!(first.text(), "first");

    let second = model.generate(input.clone()).await;
    assert!(matches!(second, Err(LanguageModelError::Refusal(_))));

    let exhausted = model.generate(input.clone()).await;
    assert!(matches!(
        exhausted,
        Err(LanguageModelError::Invariant("mock", _))
    ));

    assert_eq!(
        model.tracked_generate_inputs(),
        vec![input.clone(), input.clone(), input]
    );

    model.restore();
    assert!(model.tracked_generate_inputs().is_empty());
}

#[test]
fn mock_reports_configured_model_id() {
    let mut model = MockLanguageModel::new();
    assert_eq!(model.provider(), "mock");
    assert_eq!(model.model_id(), "mock-model");

    model.set_model_id("gpt-4-turbo-preview");
    assert_eq!(model.model_id(), "gpt-4-turbo-preview");
}
