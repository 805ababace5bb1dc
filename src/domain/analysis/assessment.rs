//! Scenario Analyzer - Composes the four analysis components into one assessment.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{
    AnalysisRow, BarrierRequirement, BarrierResolver, CriticalityScore, CriticalityScorer,
    GraphSummarizer, IntensificationClassifier, IntensificationLevel,
};
use crate::domain::hazard::{HazardCatalog, HazardGraph, ScenarioDocument};

/// Label used when analysing an imported scenario document.
pub const IMPORTED_SCENARIO_LABEL: &str = "Scénario importé";

/// Label used when analysing a manually entered node list.
pub const MANUAL_GRAPH_LABEL: &str = "Graph manuel";

/// Complete risk assessment of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub row: AnalysisRow,
    pub intensification: IntensificationLevel,
    /// `None` when the negotiation grid has no policy for the cell.
    pub barriers: Option<BarrierRequirement>,
    pub criticality: CriticalityScore,
}

impl RiskAssessment {
    /// False when the assessed graph had no nodes.
    pub fn has_data(&self) -> bool {
        self.row.has_data()
    }
}

/// Runs summarizer, classifier, barrier lookup and scorer over a graph.
#[derive(Debug, Clone)]
pub struct ScenarioAnalyzer {
    catalog: Arc<HazardCatalog>,
}

impl ScenarioAnalyzer {
    pub fn new(catalog: Arc<HazardCatalog>) -> Self {
        Self { catalog }
    }

    /// Analyzer over the built-in catalog.
    pub fn standard() -> Self {
        Self::new(HazardCatalog::standard())
    }

    pub fn catalog(&self) -> &HazardCatalog {
        &self.catalog
    }

    /// Assesses a hazard graph.
    ///
    /// An empty graph yields the "no data" row; the derived fields are then
    /// computed from zero counts and carry no meaning.
    pub fn assess(&self, graph: &HazardGraph, scenario_label: &str) -> RiskAssessment {
        let row = GraphSummarizer::new(&self.catalog).summarize(graph.nodes(), scenario_label);
        let intensification =
            IntensificationClassifier::classify(row.impacted_zones, &row.scenario_label);
        let barriers = BarrierResolver::resolve(intensification, row.impacted_zones);
        let criticality = CriticalityScorer::score(&row);

        RiskAssessment {
            row,
            intensification,
            barriers,
            criticality,
        }
    }

    /// Assesses the node elements of an editor document.
    pub fn assess_document(
        &self,
        document: &ScenarioDocument,
        scenario_label: &str,
    ) -> RiskAssessment {
        self.assess(&document.hazard_graph(), scenario_label)
    }
}

impl Default for ScenarioAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}
