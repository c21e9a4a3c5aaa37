//! Brandsense Web Server
//!
//! Axum-based server for the analyzer page and JSON API.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use brandsense_core::SentimentAnalyzer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::api::analyze))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .route("/analyze", post(routes::page::analyze))
        .route("/example", post(routes::page::example))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(analyzer: SentimentAnalyzer, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
