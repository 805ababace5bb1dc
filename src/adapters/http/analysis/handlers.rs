//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_scenario_error, ErrorResponse};
use crate::application::handlers::analysis::AnalyzeGraphHandler;

use super::dto::{AnalysisResponse, AnalyzeRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: Arc<AnalyzeGraphHandler>,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeGraphHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis - Analyse a node list or an editor document
pub async fn analyze_graph(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let query = match req.into_query() {
        Ok(query) => query,
        Err(message) => {
            return ErrorResponse::bad_request(message).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers.analyze_handler.handle(query).await {
        Ok(report) => {
            let response: AnalysisResponse = report.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}
