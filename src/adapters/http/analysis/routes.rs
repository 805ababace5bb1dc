//! HTTP routes for analysis endpoints.

use axum::{routing::post, Router};

use super::handlers::{analyze_graph, AnalysisHandlers};

/// Creates the analysis router.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/", post(analyze_graph))
        .with_state(handlers)
}
