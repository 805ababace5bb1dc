//! HTTP adapter for saved scenarios.
//!
//! - `POST /api/scenarios` - Save a named scenario document
//! - `GET /api/scenarios` - List saved scenarios, newest first
//! - `GET /api/scenarios/:id` - Get a saved scenario
//! - `GET /api/scenarios/:id/analysis` - Analyse a saved scenario

mod dto;
mod handlers;
mod routes;

pub use dto::{
    SaveScenarioRequest, ScenarioCommandResponse, ScenarioResponse, ScenarioSummaryResponse,
};
pub use handlers::ScenarioHandlers;
pub use routes::scenario_routes;
