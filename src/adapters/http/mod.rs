//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; [`api_router`] nests them
//! under `/api` and applies the shared tower layers.

pub mod analysis;
pub mod error;
pub mod scenario;

pub use analysis::{analysis_routes, AnalysisHandlers};
pub use error::ErrorResponse;
pub use scenario::{scenario_routes, ScenarioHandlers};

use std::sync::Arc;

use axum::{http::header, http::HeaderValue, http::Method, routing::get, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::handlers::{
    AnalyzeGraphHandler, AnalyzeSavedScenarioHandler, GetScenarioHandler, ListScenariosHandler,
    SaveScenarioHandler,
};
use crate::config::ServerConfig;
use crate::domain::analysis::ScenarioAnalyzer;
use crate::ports::ScenarioStore;

/// Handler state for every HTTP module.
#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisHandlers,
    pub scenarios: ScenarioHandlers,
}

impl AppState {
    /// Wires every application handler to one store and one analyzer.
    pub fn new(store: Arc<dyn ScenarioStore>, analyzer: Arc<ScenarioAnalyzer>) -> Self {
        Self {
            analysis: AnalysisHandlers::new(Arc::new(AnalyzeGraphHandler::new(analyzer.clone()))),
            scenarios: ScenarioHandlers::new(
                Arc::new(SaveScenarioHandler::new(store.clone())),
                Arc::new(ListScenariosHandler::new(store.clone())),
                Arc::new(GetScenarioHandler::new(store.clone())),
                Arc::new(AnalyzeSavedScenarioHandler::new(store, analyzer)),
            ),
        }
    }
}

/// Builds the complete API router.
///
/// ```ignore
/// let app = api_router(AppState::new(store, analyzer), &config.server);
/// axum::serve(listener, app).await?;
/// ```
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/analysis", analysis_routes(state.analysis))
        .nest("/api/scenarios", scenario_routes(state.scenarios))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Configured origins when present, permissive in development, same-origin otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_development() {
            return CorsLayer::permissive();
        }
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
