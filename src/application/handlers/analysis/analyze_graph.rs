//! AnalyzeGraphHandler - Query handler for ad-hoc scenario analysis.
//!
//! Accepts either a manual node list or a full editor document and returns
//! the assessment with both display grids. Nothing is persisted.

use std::sync::Arc;

use tracing::{debug, info};

use super::AnalysisReport;
use crate::domain::analysis::{ScenarioAnalyzer, IMPORTED_SCENARIO_LABEL, MANUAL_GRAPH_LABEL};
use crate::domain::hazard::{HazardGraph, ScenarioDocument};
use crate::domain::scenario::ScenarioError;

/// What to analyse.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    /// Node ids typed in by hand, in order.
    NodeIds(Vec<String>),
    /// A document produced by the graph editor.
    Document(ScenarioDocument),
}

/// Query to analyse a graph that is not stored.
#[derive(Debug, Clone)]
pub struct AnalyzeGraphQuery {
    /// Falls back to a default label per input kind when absent or blank.
    pub scenario_label: Option<String>,
    pub input: AnalysisInput,
}

/// Handler for ad-hoc analyses.
pub struct AnalyzeGraphHandler {
    analyzer: Arc<ScenarioAnalyzer>,
}

impl AnalyzeGraphHandler {
    pub fn new(analyzer: Arc<ScenarioAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Runs the analysis.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the input holds no nodes, or a node id is blank
    pub async fn handle(&self, query: AnalyzeGraphQuery) -> Result<AnalysisReport, ScenarioError> {
        let (graph, default_label, field) = match query.input {
            AnalysisInput::NodeIds(ids) => {
                (HazardGraph::from_ids(ids)?, MANUAL_GRAPH_LABEL, "node_ids")
            }
            AnalysisInput::Document(document) => {
                (document.hazard_graph(), IMPORTED_SCENARIO_LABEL, "document")
            }
        };

        if graph.is_empty() {
            return Err(ScenarioError::validation(field, "Scenario contains no nodes"));
        }

        let label = query
            .scenario_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(default_label);

        debug!(scenario_label = label, nodes = graph.len(), "Analyzing graph");
        let assessment = self.analyzer.assess(&graph, label);

        info!(
            scenario_label = label,
            domino_effects = assessment.row.domino_effects,
            impacted_zones = assessment.row.impacted_zones,
            score = assessment.criticality.score,
            "Graph analyzed"
        );

        Ok(assessment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{IntensificationLevel, RiskLevel};
    use crate::domain::hazard::GraphElement;

    fn handler() -> AnalyzeGraphHandler {
        AnalyzeGraphHandler::new(Arc::new(ScenarioAnalyzer::standard()))
    }

    fn node_ids(ids: &[&str]) -> AnalysisInput {
        AnalysisInput::NodeIds(ids.iter().map(|id| id.to_string()).collect())
    }

    #[tokio::test]
    async fn analyzes_manual_node_list() {
        let query = AnalyzeGraphQuery {
            scenario_label: None,
            input: node_ids(&["DN", "FC", "DP", "Dg"]),
        };

        let report = handler().handle(query).await.unwrap();
        assert_eq!(report.assessment.row.scenario_label, MANUAL_GRAPH_LABEL);
        assert_eq!(report.assessment.criticality.score, 9);
        assert_eq!(report.assessment.criticality.risk_level, RiskLevel::High);
        assert!(report.criticality_grid.highlighted().is_some());
    }

    #[tokio::test]
    async fn analyzes_document_with_default_label() {
        let document = ScenarioDocument::new(vec![
            GraphElement::node("MF"),
            GraphElement::node("DP"),
            GraphElement::edge("MF", "DP", None),
        ]);
        let query = AnalyzeGraphQuery {
            scenario_label: Some("   ".to_string()),
            input: AnalysisInput::Document(document),
        };

        let report = handler().handle(query).await.unwrap();
        assert_eq!(report.assessment.row.scenario_label, IMPORTED_SCENARIO_LABEL);
        assert_eq!(report.assessment.row.impacted_zones, 4);
    }

    #[tokio::test]
    async fn label_drives_escalation() {
        let query = AnalyzeGraphQuery {
            scenario_label: Some("S11".to_string()),
            input: node_ids(&["MF", "DP"]),
        };

        let report = handler().handle(query).await.unwrap();
        assert_eq!(
            report.assessment.intensification,
            IntensificationLevel::VeryIntense
        );
    }

    #[tokio::test]
    async fn empty_node_list_is_rejected() {
        let query = AnalyzeGraphQuery {
            scenario_label: None,
            input: node_ids(&[]),
        };

        let result = handler().handle(query).await;
        assert!(matches!(
            result,
            Err(ScenarioError::ValidationFailed { ref field, .. }) if field == "node_ids"
        ));
    }

    #[tokio::test]
    async fn document_without_nodes_is_rejected() {
        let query = AnalyzeGraphQuery {
            scenario_label: None,
            input: AnalysisInput::Document(ScenarioDocument::default()),
        };

        let result = handler().handle(query).await;
        assert!(matches!(
            result,
            Err(ScenarioError::ValidationFailed { ref field, .. }) if field == "document"
        ));
    }

    #[tokio::test]
    async fn blank_node_id_is_rejected() {
        let query = AnalyzeGraphQuery {
            scenario_label: None,
            input: node_ids(&["DV", " "]),
        };

        assert!(handler().handle(query).await.is_err());
    }
}
