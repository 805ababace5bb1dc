//! AnalysisReport - An assessment together with its display grids.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{CriticalityGrid, NegotiationGrid, RiskAssessment};

/// Everything a client needs to render one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub assessment: RiskAssessment,
    pub negotiation_grid: NegotiationGrid,
    pub criticality_grid: CriticalityGrid,
}

impl From<RiskAssessment> for AnalysisReport {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            negotiation_grid: NegotiationGrid::from_assessment(&assessment),
            criticality_grid: CriticalityGrid::from_assessment(&assessment),
            assessment,
        }
    }
}
