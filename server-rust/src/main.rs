use dotenvy::dotenv;
use eventos_server::{build_planner, create_app, init_tracing, AppState, BoxedError, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), BoxedError> {
    // Load environment variables
    dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    let planner = build_planner(&config)?;
    let app = create_app(AppState::new(planner), config.app_url.parse()?);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!("EventOS server listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
