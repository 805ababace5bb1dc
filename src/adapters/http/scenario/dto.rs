//! HTTP DTOs for scenario endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::hazard::ScenarioDocument;
use crate::domain::scenario::{Scenario, ScenarioSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to save a scenario.
///
/// Both fields are optional at the wire level so a missing one yields a 400
/// with a readable message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveScenarioRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub document: Option<ScenarioDocument>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for scenario command operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCommandResponse {
    pub scenario_id: String,
    pub message: String,
}

/// Scenario summary for list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummaryResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl From<ScenarioSummary> for ScenarioSummaryResponse {
    fn from(summary: ScenarioSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name,
            created_at: summary.created_at.to_rfc3339(),
        }
    }
}

/// Stored scenario with its document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub document: ScenarioDocument,
}

impl From<Scenario> for ScenarioResponse {
    fn from(scenario: Scenario) -> Self {
        Self {
            id: scenario.id().to_string(),
            name: scenario.name().to_string(),
            created_at: scenario.created_at().to_rfc3339(),
            node_count: scenario.document().node_count(),
            edge_count: scenario.document().edge_count(),
            document: scenario.document().clone(),
        }
    }
}
