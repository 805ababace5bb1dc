//! Display grids derived from a risk assessment.
//!
//! Both grids are pure projections: they enumerate every cell of the lookup
//! table behind the assessment and flag the one the assessment falls in.

use serde::{Deserialize, Serialize};

use super::{
    BarrierRequirement, BarrierResolver, CriticalityScore, IntensificationLevel, RiskAssessment,
    MAX_FACTOR,
};

/// Background colour of the highlighted cell.
pub const HIGHLIGHT_COLOR: &str = "#e0f7fa";

/// One cell of the safety-objective negotiation grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationCell {
    pub impacted_zones: u32,
    pub barriers: Option<BarrierRequirement>,
    pub highlighted: bool,
}

/// One intensification level across zones 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationRow {
    pub level: IntensificationLevel,
    pub label: String,
    pub color: String,
    pub cells: Vec<NegotiationCell>,
}

/// Barrier requirement per (intensification level, impacted zones).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationGrid {
    pub rows: Vec<NegotiationRow>,
    pub highlight_color: String,
}

impl NegotiationGrid {
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        let rows = IntensificationLevel::ALL
            .iter()
            .map(|&level| NegotiationRow {
                level,
                label: level.label().to_string(),
                color: level.color().to_string(),
                cells: (1..=BarrierResolver::MAX_ZONES)
                    .map(|zones| NegotiationCell {
                        impacted_zones: zones,
                        barriers: BarrierResolver::resolve(level, zones),
                        highlighted: assessment.has_data()
                            && level == assessment.intensification
                            && zones == assessment.row.impacted_zones,
                    })
                    .collect(),
            })
            .collect();

        Self {
            rows,
            highlight_color: HIGHLIGHT_COLOR.to_string(),
        }
    }

    /// The highlighted cell, if the assessment falls inside the grid.
    pub fn highlighted(&self) -> Option<(IntensificationLevel, &NegotiationCell)> {
        self.rows.iter().find_map(|row| {
            row.cells
                .iter()
                .find(|cell| cell.highlighted)
                .map(|cell| (row.level, cell))
        })
    }
}

/// One cell of the 4x4 criticality grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalityCell {
    #[serde(flatten)]
    pub score: CriticalityScore,
    pub color: String,
    pub highlighted: bool,
}

/// Severity rows G = 4..1 against frequency columns F = 1..4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalityGrid {
    /// First row is G = 4.
    pub rows: Vec<Vec<CriticalityCell>>,
    pub highlight_color: String,
}

impl CriticalityGrid {
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        let current = &assessment.criticality;
        let rows = (1..=MAX_FACTOR)
            .rev()
            .map(|severity| {
                (1..=MAX_FACTOR)
                    .map(|frequency| {
                        let score = CriticalityScore::from_factors(severity, frequency);
                        CriticalityCell {
                            color: score.risk_level.grid_color().to_string(),
                            highlighted: severity == current.severity
                                && frequency == current.frequency,
                            score,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            highlight_color: HIGHLIGHT_COLOR.to_string(),
        }
    }

    pub fn highlighted(&self) -> Option<&CriticalityCell> {
        self.rows.iter().flatten().find(|cell| cell.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{RiskLevel, ScenarioAnalyzer};
    use crate::domain::hazard::HazardGraph;

    fn assess(ids: &[&str], label: &str) -> RiskAssessment {
        let graph = HazardGraph::from_ids(ids.iter().copied()).unwrap();
        ScenarioAnalyzer::standard().assess(&graph, label)
    }

    #[test]
    fn negotiation_grid_has_three_rows_of_five() {
        let grid = NegotiationGrid::from_assessment(&assess(&["DV"], "S1"));
        assert_eq!(grid.rows.len(), 3);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 5));
        assert_eq!(grid.rows[0].color, "#d0f0c0");
        assert_eq!(grid.rows[2].label, "Très intense");
        assert_eq!(grid.highlight_color, HIGHLIGHT_COLOR);
    }

    #[test]
    fn negotiation_grid_keeps_undefined_cells() {
        let grid = NegotiationGrid::from_assessment(&assess(&["DV"], "S1"));
        assert_eq!(grid.rows[1].cells[0].barriers, None);
        assert_eq!(grid.rows[2].cells[0].barriers, None);
        assert_eq!(
            grid.rows[2].cells[4].barriers,
            Some(BarrierRequirement::new(5, 7))
        );
    }

    #[test]
    fn negotiation_grid_highlights_exactly_the_assessed_cell() {
        let grid = NegotiationGrid::from_assessment(&assess(&["MF", "DP"], "S11"));
        let (level, cell) = grid.highlighted().unwrap();
        assert_eq!(level, IntensificationLevel::VeryIntense);
        assert_eq!(cell.impacted_zones, 4);

        let count = grid
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .filter(|cell| cell.highlighted)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_assessment_highlights_nothing() {
        let empty = ScenarioAnalyzer::standard().assess(&HazardGraph::default(), "S1");
        assert!(NegotiationGrid::from_assessment(&empty).highlighted().is_none());
        assert!(CriticalityGrid::from_assessment(&empty).highlighted().is_none());
    }

    #[test]
    fn criticality_grid_runs_from_highest_severity() {
        let grid = CriticalityGrid::from_assessment(&assess(&["DV"], "S1"));
        assert_eq!(grid.rows.len(), 4);
        assert!(grid.rows.iter().all(|row| row.len() == 4));

        let top_right = &grid.rows[0][3];
        assert_eq!(top_right.score.severity, 4);
        assert_eq!(top_right.score.frequency, 4);
        assert_eq!(top_right.score.risk_level, RiskLevel::Extreme);
        assert_eq!(top_right.color, "#d32f2f");

        let bottom_left = &grid.rows[3][0];
        assert_eq!(bottom_left.score.score, 1);
        assert_eq!(bottom_left.color, "#a8e6cf");
    }

    #[test]
    fn criticality_grid_highlights_assessed_factors() {
        // 3 dominos over 3 zones: G = 3, F = 3
        let assessment = assess(&["DN", "FC", "DP", "Dg"], "S4");
        assert_eq!(assessment.criticality.score, 9);

        let grid = CriticalityGrid::from_assessment(&assessment);
        let cell = grid.highlighted().unwrap();
        assert_eq!(cell.score.severity, 3);
        assert_eq!(cell.score.frequency, 3);
        assert_eq!(cell.score.risk_level, RiskLevel::High);
    }

    #[test]
    fn cell_serializes_flat() {
        let grid = CriticalityGrid::from_assessment(&assess(&["DV"], "S1"));
        let json = serde_json::to_value(&grid.rows[0][0]).unwrap();
        assert_eq!(json["severity"], 4);
        assert_eq!(json["frequency"], 1);
        assert_eq!(json["risk_level"], "moderate");
    }
}
