//! HTTP routes for scenario endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    analyze_scenario, get_scenario, list_scenarios, save_scenario, ScenarioHandlers,
};

/// Creates the scenario router with all endpoints.
pub fn scenario_routes(handlers: ScenarioHandlers) -> Router {
    Router::new()
        .route("/", get(list_scenarios).post(save_scenario))
        .route("/:id", get(get_scenario))
        .route("/:id/analysis", get(analyze_scenario))
        .with_state(handlers)
}
