use eventos_llm::{
    testing::{MockGenerateResult, MockLanguageModel},
    LanguageModelError, Message, ModelResponse, ModelUsage, Part,
};
use eventos_planner::{
    ChatError, ChatMessage, ChatRelay, EventContext, GenerationError,
};
use std::sync::Arc;

fn summit_context() -> EventContext {
    EventContext {
        name: "Tech Summit".to_string(),
        event_type: "conference".to_string(),
        status: "live".to_string(),
        attendees: 1247,
        sessions: 3,
        progress: 65,
    }
}

#[tokio::test]
async fn empty_history_is_rejected_before_any_call() {
    let model = Arc::new(MockLanguageModel::new());
    let relay = ChatRelay::new(Some(model.clone()));

    let result = relay.relay(&[], Some(&summit_context())).await;

    assert!(matches!(result, Err(ChatError::EmptyHistory)));
    assert!(model.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn reply_is_returned_verbatim_with_usage() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(ModelResponse {
        content: vec![Part::text("  Open two more check-in lanes.\n")],
        usage: Some(ModelUsage {
            input_tokens: 120,
            output_tokens: 9,
        }),
    });

    let history = vec![
        ChatMessage::user("How is check-in going?"),
        ChatMessage::assistant("72% of attendees are in."),
        ChatMessage::user("What should I do about the queue?"),
    ];
    let reply = ChatRelay::new(Some(model.clone()))
        .relay(&history, Some(&summit_context()))
        .await
        .expect("relay succeeds");

    assert_eq!(reply.message, "  Open two more check-in lanes.\n");
    assert_eq!(reply.usage.map(|usage| usage.output_tokens), Some(9));

    let inputs = model.tracked_generate_inputs();
    let input = &inputs[0];
    assert_eq!(input.max_tokens, Some(500));
    assert_eq!(input.temperature, Some(0.7));
    assert_eq!(input.messages.len(), 3);
    assert!(matches!(input.messages[1], Message::Assistant(_)));
    assert_eq!(input.messages[2].text(), "What should I do about the queue?");
    assert!(input
        .system_prompt
        .as_deref()
        .is_some_and(|prompt| prompt.contains("- Event: Tech Summit (conference)")));
}

#[tokio::test]
async fn generic_prompt_is_used_without_context() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(MockGenerateResult::text("Sure."));

    ChatRelay::new(Some(model.clone()))
        .relay(&[ChatMessage::user("Hello")], None)
        .await
        .expect("relay succeeds");

    let prompt = model.tracked_generate_inputs()[0]
        .system_prompt
        .clone()
        .unwrap_or_default();
    assert!(prompt.contains("Help users with event planning"));
    assert!(!prompt.contains("Current Event Context"));
}

#[tokio::test]
async fn model_failures_are_surfaced() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::Invariant(
        "mock",
        "upstream unavailable".to_string(),
    ));

    let result = ChatRelay::new(Some(model))
        .relay(&[ChatMessage::user("Hello")], None)
        .await;

    assert!(matches!(
        result,
        Err(ChatError::Completion(GenerationError::LanguageModel(_)))
    ));
}

#[tokio::test]
async fn missing_model_reports_missing_credential() {
    let result = ChatRelay::new(None)
        .relay(&[ChatMessage::user("Hello")], None)
        .await;

    assert!(matches!(
        result,
        Err(ChatError::Completion(GenerationError::MissingCredential))
    ));
}

#[tokio::test]
async fn blank_reply_is_an_error() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(ModelResponse::default());

    let result = ChatRelay::new(Some(model))
        .relay(&[ChatMessage::user("Hello")], None)
        .await;

    assert!(matches!(
        result,
        Err(ChatError::Completion(GenerationError::EmptyResponse))
    ));
}
