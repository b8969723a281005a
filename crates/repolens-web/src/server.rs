//! Router assembly and server startup.

use crate::routes::{explain_routes, health_routes, summary_routes};
use crate::state::AppState;
use crate::{Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use repolens_config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

const MAX_BODY_SIZE_10MB: usize = 10 * 1024 * 1024;

/// Build the full application router for the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            "http://localhost:3000".parse().unwrap(),
            "http://localhost:5173".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
            "http://127.0.0.1:5173".parse().unwrap(),
        ]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(explain_routes())
        .merge(summary_routes())
        .with_state(state)
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_10MB))
        .layer(cors)
}

/// Start the relay server, constructing the chat provider from config.
pub async fn start_server(config: &Config) -> Result<()> {
    let provider = repolens_llm::create_chat_provider(&config.llm)
        .map_err(|e| WebError::Config(e.to_string()))?;
    let state = AppState::new(Arc::from(provider));

    let router = app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting relay server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, router).await.map_err(WebError::Io)?;

    Ok(())
}
