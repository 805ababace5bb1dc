//! AnalyzeSavedScenarioHandler - Query handler analysing a stored scenario.
//!
//! The scenario's stored name is its analysis label, so a scenario saved as
//! "S11" escalates exactly like an ad-hoc analysis labelled "S11".

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::analysis::AnalysisReport;
use crate::domain::analysis::ScenarioAnalyzer;
use crate::domain::foundation::ScenarioId;
use crate::domain::scenario::ScenarioError;
use crate::ports::ScenarioStore;

/// Query to analyse a saved scenario.
#[derive(Debug, Clone)]
pub struct AnalyzeSavedScenarioQuery {
    pub scenario_id: ScenarioId,
}

/// Handler for analysing saved scenarios.
pub struct AnalyzeSavedScenarioHandler {
    store: Arc<dyn ScenarioStore>,
    analyzer: Arc<ScenarioAnalyzer>,
}

impl AnalyzeSavedScenarioHandler {
    pub fn new(store: Arc<dyn ScenarioStore>, analyzer: Arc<ScenarioAnalyzer>) -> Self {
        Self { store, analyzer }
    }

    /// Analyses the stored document.
    ///
    /// A stored document without nodes yields a report whose assessment
    /// has no data rather than an error.
    pub async fn handle(
        &self,
        query: AnalyzeSavedScenarioQuery,
    ) -> Result<AnalysisReport, ScenarioError> {
        let scenario = self
            .store
            .find_by_id(&query.scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(query.scenario_id))?;

        debug!(scenario_id = %scenario.id(), name = scenario.name(), "Analyzing saved scenario");
        let assessment = self
            .analyzer
            .assess_document(scenario.document(), scenario.name());

        if !assessment.has_data() {
            warn!(scenario_id = %scenario.id(), "Saved scenario has no nodes");
        }

        Ok(assessment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryScenarioStore;
    use crate::domain::analysis::IntensificationLevel;
    use crate::domain::hazard::{GraphElement, ScenarioDocument};
    use crate::domain::scenario::Scenario;

    async fn handler_with(scenario: &Scenario) -> AnalyzeSavedScenarioHandler {
        let store = Arc::new(InMemoryScenarioStore::new());
        store.save(scenario).await.unwrap();
        AnalyzeSavedScenarioHandler::new(store, Arc::new(ScenarioAnalyzer::standard()))
    }

    #[tokio::test]
    async fn analyses_under_stored_name() {
        let scenario = Scenario::new(
            ScenarioId::new(),
            "S11",
            ScenarioDocument::new(vec![GraphElement::node("MF"), GraphElement::node("DP")]),
        )
        .unwrap();
        let handler = handler_with(&scenario).await;

        let report = handler
            .handle(AnalyzeSavedScenarioQuery {
                scenario_id: *scenario.id(),
            })
            .await
            .unwrap();

        assert_eq!(report.assessment.row.scenario_label, "S11");
        assert_eq!(
            report.assessment.intensification,
            IntensificationLevel::VeryIntense
        );
    }

    #[tokio::test]
    async fn empty_document_yields_no_data_report() {
        let scenario =
            Scenario::new(ScenarioId::new(), "Vide", ScenarioDocument::default()).unwrap();
        let handler = handler_with(&scenario).await;

        let report = handler
            .handle(AnalyzeSavedScenarioQuery {
                scenario_id: *scenario.id(),
            })
            .await
            .unwrap();

        assert!(!report.assessment.has_data());
    }

    #[tokio::test]
    async fn unknown_scenario_is_not_found() {
        let handler = AnalyzeSavedScenarioHandler::new(
            Arc::new(InMemoryScenarioStore::new()),
            Arc::new(ScenarioAnalyzer::standard()),
        );

        let result = handler
            .handle(AnalyzeSavedScenarioQuery {
                scenario_id: ScenarioId::new(),
            })
            .await;

        assert!(matches!(result, Err(ScenarioError::NotFound(_))));
    }
}
