//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::analysis::{AnalysisInput, AnalysisReport, AnalyzeGraphQuery};
use crate::domain::analysis::{
    CriticalityGrid, IntensificationLevel, NegotiationGrid, RiskLevel,
};
use crate::domain::hazard::{NatureCategory, ScenarioDocument};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to analyse a graph. Exactly one of `node_ids` and `document` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub scenario_label: Option<String>,
    #[serde(default)]
    pub node_ids: Option<Vec<String>>,
    #[serde(default)]
    pub document: Option<ScenarioDocument>,
}

impl AnalyzeRequest {
    /// Converts the request into a query, rejecting ambiguous input.
    pub fn into_query(self) -> Result<AnalyzeGraphQuery, &'static str> {
        let input = match (self.node_ids, self.document) {
            (Some(ids), None) => AnalysisInput::NodeIds(ids),
            (None, Some(document)) => AnalysisInput::Document(document),
            (None, None) => return Err("Either node_ids or document is required"),
            (Some(_), Some(_)) => return Err("Provide node_ids or document, not both"),
        };

        Ok(AnalyzeGraphQuery {
            scenario_label: self.scenario_label,
            input,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The danger-matrix row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRowResponse {
    pub scenario_label: String,
    pub nature: NatureCategory,
    pub nature_label: String,
    pub domino_effects: u32,
    pub impacted_zones: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensificationResponse {
    pub level: IntensificationLevel,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarriersResponse {
    pub technical: u8,
    pub organizational: u8,
    /// e.g. "2 BT + 1 BU"
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalityResponse {
    pub severity: u8,
    pub frequency: u8,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub color: String,
}

/// Full analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// False when the analysed graph had no nodes.
    pub has_data: bool,
    pub row: AnalysisRowResponse,
    pub intensification: IntensificationResponse,
    /// Absent when no barrier policy exists for the cell.
    pub barriers: Option<BarriersResponse>,
    pub criticality: CriticalityResponse,
    pub negotiation_grid: NegotiationGrid,
    pub criticality_grid: CriticalityGrid,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        let assessment = report.assessment;
        let row = assessment.row;
        let criticality = assessment.criticality;

        Self {
            has_data: row.has_data(),
            row: AnalysisRowResponse {
                nature_label: row.nature.label().to_string(),
                scenario_label: row.scenario_label,
                nature: row.nature,
                domino_effects: row.domino_effects,
                impacted_zones: row.impacted_zones,
            },
            intensification: IntensificationResponse {
                level: assessment.intensification,
                label: assessment.intensification.label().to_string(),
                color: assessment.intensification.color().to_string(),
            },
            barriers: assessment.barriers.map(|b| BarriersResponse {
                technical: b.technical,
                organizational: b.organizational,
                summary: b.to_string(),
            }),
            criticality: CriticalityResponse {
                severity: criticality.severity,
                frequency: criticality.frequency,
                score: criticality.score,
                risk_level: criticality.risk_level,
                risk_label: criticality.risk_level.label().to_string(),
                color: criticality.risk_level.color().to_string(),
            },
            negotiation_grid: report.negotiation_grid,
            criticality_grid: report.criticality_grid,
        }
    }
}
