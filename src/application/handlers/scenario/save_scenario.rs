//! SaveScenarioHandler - Command handler for saving a named scenario.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ScenarioId;
use crate::domain::hazard::ScenarioDocument;
use crate::domain::scenario::{Scenario, ScenarioError};
use crate::ports::ScenarioStore;

/// Command to save a scenario document under a name.
#[derive(Debug, Clone)]
pub struct SaveScenarioCommand {
    pub name: String,
    pub document: ScenarioDocument,
}

/// Handler for saving scenarios.
pub struct SaveScenarioHandler {
    store: Arc<dyn ScenarioStore>,
}

impl SaveScenarioHandler {
    pub fn new(store: Arc<dyn ScenarioStore>) -> Self {
        Self { store }
    }

    /// Saves the scenario and returns it with its new ID.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank or too long
    /// - `Infrastructure` on storage failure
    pub async fn handle(&self, cmd: SaveScenarioCommand) -> Result<Scenario, ScenarioError> {
        let scenario = Scenario::new(ScenarioId::new(), cmd.name, cmd.document)?;

        self.store.save(&scenario).await?;

        info!(
            scenario_id = %scenario.id(),
            name = scenario.name(),
            nodes = scenario.document().node_count(),
            "Scenario saved"
        );

        Ok(scenario)
    }
}
