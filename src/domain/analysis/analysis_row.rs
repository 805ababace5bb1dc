//! Analysis Row - One line of the danger matrix.

use serde::{Deserialize, Serialize};

use crate::domain::hazard::NatureCategory;

/// Summary of a hazard graph: nature, domino effects and impacted zones.
///
/// Produced by [`super::GraphSummarizer`] and consumed unchanged by the
/// intensification, barrier and criticality components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub scenario_label: String,
    pub nature: NatureCategory,
    pub domino_effects: u32,
    pub impacted_zones: u32,
    /// Nodes the row was computed from; zero for the "no data" row.
    pub node_count: u32,
}

impl AnalysisRow {
    /// Sentinel row for a scenario without nodes.
    pub fn no_data(scenario_label: impl Into<String>) -> Self {
        Self {
            scenario_label: scenario_label.into(),
            nature: NatureCategory::Unknown,
            domino_effects: 0,
            impacted_zones: 0,
            node_count: 0,
        }
    }

    /// False for the "no data" row.
    pub fn has_data(&self) -> bool {
        self.node_count > 0
    }
}
