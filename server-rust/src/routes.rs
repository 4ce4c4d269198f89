use crate::{error::ApiError, AppState};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use eventos_planner::{
    Blueprint, ChatMessage, ChatReply, EventContext, EventDetails, EventSnapshot, Insight,
    QuestionnaireAnswers, Source,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct BlueprintRequest {
    pub answers: QuestionnaireAnswers,
}

#[derive(Serialize)]
pub struct BlueprintResponse {
    pub blueprint: Blueprint,
    pub source: Source,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    pub event_data: EventSnapshot,
}

#[derive(Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
    pub source: Source,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub event_context: Option<EventContext>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub event_details: EventDetails,
}

#[derive(Serialize)]
pub struct DescriptionResponse {
    pub description: String,
    pub source: Source,
}

pub async fn home_handler() -> &'static str {
    "Welcome to the EventOS AI server!"
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn blueprint_handler(
    State(state): State<AppState>,
    payload: Result<Json<BlueprintRequest>, JsonRejection>,
) -> Result<Json<BlueprintResponse>, ApiError> {
    let Json(BlueprintRequest { answers }) = payload?;
    answers.validate()?;

    let generated = state.planner.generate_blueprint(&answers).await;
    Ok(Json(BlueprintResponse {
        blueprint: generated.value,
        source: generated.source,
    }))
}

pub async fn insights_handler(
    State(state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let Json(InsightsRequest { event_data }) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejecting insights request");
        ApiError::MissingEventData
    })?;

    let generated = state.planner.generate_insights(&event_data).await;
    Ok(Json(InsightsResponse {
        insights: generated.value,
        source: generated.source,
    }))
}

pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(ChatRequest {
        messages,
        event_context,
    }) = payload?;

    let reply = state
        .planner
        .relay_chat(&messages, event_context.as_ref())
        .await?;
    Ok(Json(reply))
}

pub async fn description_handler(
    State(state): State<AppState>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Result<Json<DescriptionResponse>, ApiError> {
    let Json(DescriptionRequest { event_details }) = payload?;

    let generated = state.planner.describe_event(&event_details).await;
    Ok(Json(DescriptionResponse {
        description: generated.value,
        source: generated.source,
    }))
}
