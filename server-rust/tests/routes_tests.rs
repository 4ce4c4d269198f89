use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Request, StatusCode},
    Router,
};
use eventos_llm::{
    testing::{MockGenerateResult, MockLanguageModel},
    LanguageModelError,
};
use eventos_planner::EventPlanner;
use eventos_server::{create_app, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(planner: EventPlanner) -> Router {
    create_app(
        AppState::new(planner),
        HeaderValue::from_static("http://localhost:3000"),
    )
}

async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn tech_summit_answers() -> Value {
    json!({
        "answers": {
            "eventName": "Tech Summit",
            "eventType": "conference",
            "attendees": "500",
            "budget": "50000",
            "duration": "2-days",
            "goals": "networking"
        }
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app_with(EventPlanner::builder().build())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&bytes).unwrap(),
        json!({ "status": "ok" })
    );
}

#[tokio::test]
async fn blueprint_without_model_returns_fallback() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/blueprint",
        &tech_summit_answers(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["blueprint"]["eventName"], "Tech Summit");
    assert_eq!(body["blueprint"]["budget"][0]["amount"], "$15000");
    assert_eq!(body["blueprint"]["vendors"][0]["type"], "Venue");
    assert_eq!(body["blueprint"]["timeline"][3]["duration"], "2 Days");
    assert_eq!(body["blueprint"]["marketing"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn blueprint_rejects_missing_name_before_calling_model() {
    let model = Arc::new(MockLanguageModel::new());
    let mut request = tech_summit_answers();
    request["answers"]["eventName"] = json!("   ");

    let (status, body) = post_json(
        app_with(EventPlanner::builder().model(model.clone()).build()),
        "/api/ai/blueprint",
        &request,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(model.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn insights_fall_back_on_model_error() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::Invariant(
        "mock",
        "upstream unavailable".to_string(),
    ));

    let (status, body) = post_json(
        app_with(EventPlanner::builder().insights_model(model).build()),
        "/api/ai/insights",
        &json!({
            "eventData": {
                "name": "Tech Summit",
                "type": "conference",
                "attendees": { "registered": 1247, "checkedIn": 892, "vip": 40 },
                "sessions": { "total": 20, "live": 3, "upcoming": 10 },
                "progress": 65,
                "urgentTasks": 3
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(
        body["insights"][0]["message"],
        "Currently 72% checked in. Monitor for any delays."
    );
    assert_eq!(body["insights"][2]["priority"], 3);
}

#[tokio::test]
async fn insights_require_event_data() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/insights",
        &json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Event data required" }));
}

#[tokio::test]
async fn insights_reject_undecodable_event_data() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/insights",
        &json!({ "eventData": { "name": 42 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Event data required" }));
}

#[tokio::test]
async fn chat_returns_model_reply() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(MockGenerateResult::text("Open two more lanes."));

    let (status, body) = post_json(
        app_with(EventPlanner::builder().chat_model(model).build()),
        "/api/ai/chat",
        &json!({
            "messages": [{ "role": "user", "content": "Queue is long" }],
            "eventContext": {
                "name": "Tech Summit",
                "type": "conference",
                "status": "live",
                "attendees": 1247,
                "sessions": 3,
                "progress": 65
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Open two more lanes.");
}

#[tokio::test]
async fn chat_rejects_empty_messages() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/chat",
        &json!({ "messages": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Messages required" }));
}

#[tokio::test]
async fn chat_without_credential_is_unavailable() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/chat",
        &json!({ "messages": [{ "role": "user", "content": "Hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "OpenAI API key not configured" }));
}

#[tokio::test]
async fn chat_model_failure_is_bad_gateway() {
    let model = Arc::new(MockLanguageModel::new());
    model.enqueue_generate(LanguageModelError::Refusal("no".to_string()));

    let (status, body) = post_json(
        app_with(EventPlanner::builder().chat_model(model).build()),
        "/api/ai/chat",
        &json!({ "messages": [{ "role": "user", "content": "Hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "Failed to generate response" }));
}

#[tokio::test]
async fn description_falls_back_to_template() {
    let (status, body) = post_json(
        app_with(EventPlanner::builder().build()),
        "/api/ai/description",
        &json!({
            "eventDetails": {
                "type": "workshop",
                "duration": "half-day",
                "attendees": "40",
                "goals": "Hands-on Rust training."
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(
        body["description"],
        "workshop event for 40 attendees. Hands-on Rust training."
    );
}
