//! HTTP handlers for scenario endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::analysis::AnalysisResponse;
use crate::adapters::http::error::{handle_scenario_error, ErrorResponse};
use crate::application::handlers::scenario::{
    AnalyzeSavedScenarioHandler, AnalyzeSavedScenarioQuery, GetScenarioHandler, GetScenarioQuery,
    ListScenariosHandler, SaveScenarioCommand, SaveScenarioHandler,
};
use crate::domain::foundation::ScenarioId;

use super::dto::{
    SaveScenarioRequest, ScenarioCommandResponse, ScenarioResponse, ScenarioSummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScenarioHandlers {
    save_handler: Arc<SaveScenarioHandler>,
    list_handler: Arc<ListScenariosHandler>,
    get_handler: Arc<GetScenarioHandler>,
    analyze_handler: Arc<AnalyzeSavedScenarioHandler>,
}

impl ScenarioHandlers {
    pub fn new(
        save_handler: Arc<SaveScenarioHandler>,
        list_handler: Arc<ListScenariosHandler>,
        get_handler: Arc<GetScenarioHandler>,
        analyze_handler: Arc<AnalyzeSavedScenarioHandler>,
    ) -> Self {
        Self {
            save_handler,
            list_handler,
            get_handler,
            analyze_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/scenarios - Save a named scenario
pub async fn save_scenario(
    State(handlers): State<ScenarioHandlers>,
    Json(req): Json<SaveScenarioRequest>,
) -> Response {
    let (Some(name), Some(document)) = (req.name, req.document) else {
        return ErrorResponse::bad_request("Missing scenario name or document")
            .into_response_with(StatusCode::BAD_REQUEST);
    };

    match handlers
        .save_handler
        .handle(SaveScenarioCommand { name, document })
        .await
    {
        Ok(scenario) => {
            let response = ScenarioCommandResponse {
                scenario_id: scenario.id().to_string(),
                message: "Scenario saved successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/scenarios - List saved scenarios, newest first
pub async fn list_scenarios(State(handlers): State<ScenarioHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(scenarios) => {
            let response: Vec<ScenarioSummaryResponse> =
                scenarios.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/scenarios/:id - Get a saved scenario
pub async fn get_scenario(
    State(handlers): State<ScenarioHandlers>,
    Path(scenario_id): Path<String>,
) -> Response {
    let scenario_id = match parse_scenario_id(&scenario_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetScenarioQuery { scenario_id })
        .await
    {
        Ok(scenario) => {
            let response: ScenarioResponse = scenario.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/scenarios/:id/analysis - Analyse a saved scenario under its name
pub async fn analyze_scenario(
    State(handlers): State<ScenarioHandlers>,
    Path(scenario_id): Path<String>,
) -> Response {
    let scenario_id = match parse_scenario_id(&scenario_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .analyze_handler
        .handle(AnalyzeSavedScenarioQuery { scenario_id })
        .await
    {
        Ok(report) => {
            let response: AnalysisResponse = report.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

fn parse_scenario_id(raw: &str) -> Result<ScenarioId, Response> {
    raw.parse::<ScenarioId>().map_err(|_| {
        ErrorResponse::bad_request("Invalid scenario ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}
