//! ListScenariosHandler - Query handler for listing saved scenarios.

use std::sync::Arc;

use tracing::debug;

use crate::domain::scenario::{ScenarioError, ScenarioSummary};
use crate::ports::ScenarioStore;

/// Handler for listing scenarios, newest first.
pub struct ListScenariosHandler {
    store: Arc<dyn ScenarioStore>,
}

impl ListScenariosHandler {
    pub fn new(store: Arc<dyn ScenarioStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<ScenarioSummary>, ScenarioError> {
        let scenarios = self.store.list().await?;
        debug!(count = scenarios.len(), "Listed scenarios");
        Ok(scenarios)
    }
}
