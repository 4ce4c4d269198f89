use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use eventos_llm::openai::{OpenAIChatModel, OpenAIChatModelOptions};
use eventos_planner::{EventPlanner, SharedModel};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "eventos=info,tower_http=info";

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<EventPlanner>,
}

impl AppState {
    #[must_use]
    pub fn new(planner: EventPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Router with every endpoint, CORS restricted to `cors_origin` and request
/// tracing.
pub fn create_app(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(routes::home_handler))
        .route("/health", get(routes::health_handler))
        .route("/api/ai/blueprint", post(routes::blueprint_handler))
        .route("/api/ai/insights", post(routes::insights_handler))
        .route("/api/ai/chat", post(routes::chat_handler))
        .route("/api/ai/description", post(routes::description_handler))
        .layer(
            CorsLayer::new()
                .allow_origin([cors_origin])
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One OpenAI model per workflow when an API key is configured. Without a
/// key every workflow takes its no-credential path.
pub fn build_planner(config: &ServerConfig) -> Result<EventPlanner, reqwest::Error> {
    let mut params = EventPlanner::builder().timeout(config.call_timeout);

    let Some(api_key) = config.api_key.clone() else {
        tracing::warn!("OPENAI_API_KEY is not set, AI workflows will use their fallbacks");
        return Ok(params.build());
    };

    let client = reqwest::Client::builder()
        .timeout(config.call_timeout)
        .build()?;
    let model = |model_id: &str| -> SharedModel {
        Arc::new(OpenAIChatModel::new(
            model_id,
            OpenAIChatModelOptions {
                base_url: Some(config.base_url.clone()),
                api_key: api_key.clone(),
                headers: None,
                client: Some(client.clone()),
            },
        ))
    };

    params = params
        .blueprint_model(model(&config.blueprint_model))
        .insights_model(model(&config.insights_model))
        .chat_model(model(&config.chat_model))
        .description_model(model(&config.description_model));

    Ok(params.build())
}

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
