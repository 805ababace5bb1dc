//! GetScenarioHandler - Query handler for retrieving a saved scenario.

use std::sync::Arc;

use crate::domain::foundation::ScenarioId;
use crate::domain::scenario::{Scenario, ScenarioError};
use crate::ports::ScenarioStore;

/// Query to get a scenario by ID.
#[derive(Debug, Clone)]
pub struct GetScenarioQuery {
    pub scenario_id: ScenarioId,
}

/// Handler for retrieving scenarios.
pub struct GetScenarioHandler {
    store: Arc<dyn ScenarioStore>,
}

impl GetScenarioHandler {
    pub fn new(store: Arc<dyn ScenarioStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetScenarioQuery) -> Result<Scenario, ScenarioError> {
        self.store
            .find_by_id(&query.scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(query.scenario_id))
    }
}
