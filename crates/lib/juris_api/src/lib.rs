//! # juris_api
//!
//! HTTP API library for Juris: the chat endpoint, the court catalog, a health
//! check and the chat page with its wasm bundle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use juris_core::llm::{CompletionProvider, OpenAiProvider};
use juris_core::search::{MockResultSource, ResultSource};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, courts, health, page};

/// Shared application state passed to all handlers.
///
/// Holds no per-request data; every field is immutable or internally shared.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Chat completion backend.
    pub provider: Arc<dyn CompletionProvider>,
    /// Source of the results embedded in each prompt.
    pub results: Arc<dyn ResultSource>,
}

impl AppState {
    /// Production wiring: OpenAI-compatible provider and the mock result generator.
    pub fn from_config(config: ApiConfig) -> Self {
        let provider = Arc::new(OpenAiProvider::new(config.llm.clone()));
        let results = Arc::new(MockResultSource::new(config.generator));
        Self {
            config,
            provider,
            results,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::GET_API_COURTS, get(courts::list_courts_handler))
        .route(routes::POST_API_CHAT, post(chat::chat_handler));

    let pkg = ServeDir::new(&state.config.wasm_pkg_dir);

    Router::new()
        .route(routes::GET_INDEX, get(page::index_handler))
        .merge(api)
        .nest_service(routes::PKG_PREFIX, pkg)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
