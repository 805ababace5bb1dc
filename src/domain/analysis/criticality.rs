//! Criticality Scorer - Severity (G) x frequency (F) risk scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use super::AnalysisRow;

/// Upper bound of both severity and frequency.
pub const MAX_FACTOR: u8 = 4;

/// Risk bucket of a criticality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
    Unknown,
}

impl RiskLevel {
    /// Defined buckets, lowest first.
    pub const BUCKETS: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    /// The one bucket function behind every risk display.
    ///
    /// | score | level |
    /// |-------|-------|
    /// | 1-3 | Low |
    /// | 4-6 | Moderate |
    /// | 7-12 | High |
    /// | 13-16 | Extreme |
    /// | other | Unknown |
    pub fn bucketize(score: u8) -> Self {
        match score {
            1..=3 => RiskLevel::Low,
            4..=6 => RiskLevel::Moderate,
            7..=12 => RiskLevel::High,
            13..=16 => RiskLevel::Extreme,
            _ => RiskLevel::Unknown,
        }
    }

    /// Score range covered by the bucket.
    pub fn range(&self) -> Option<RangeInclusive<u8>> {
        match self {
            RiskLevel::Low => Some(1..=3),
            RiskLevel::Moderate => Some(4..=6),
            RiskLevel::High => Some(7..=12),
            RiskLevel::Extreme => Some(13..=16),
            RiskLevel::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Faible",
            RiskLevel::Moderate => "Modéré",
            RiskLevel::High => "Élevé",
            RiskLevel::Extreme => "Extrême",
            RiskLevel::Unknown => "Inconnu",
        }
    }

    /// Legend colour of the level.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4CAF50",
            RiskLevel::Moderate => "#FFEB3B",
            RiskLevel::High => "#F44336",
            RiskLevel::Extreme => "#B71C1C",
            RiskLevel::Unknown => "#9E9E9E",
        }
    }

    /// Cell colour in the 4x4 criticality grid.
    pub fn grid_color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#a8e6cf",
            RiskLevel::Moderate => "#fff59d",
            RiskLevel::High => "#ff8a65",
            RiskLevel::Extreme => "#d32f2f",
            RiskLevel::Unknown => "#eeeeee",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity, frequency and their product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriticalityScore {
    /// G, 1..=4
    pub severity: u8,
    /// F, 0..=4; zero only when there are no domino effects
    pub frequency: u8,
    pub score: u8,
    pub risk_level: RiskLevel,
}

impl CriticalityScore {
    /// Builds the score of a (G, F) pair.
    pub fn from_factors(severity: u8, frequency: u8) -> Self {
        let score = severity.saturating_mul(frequency);
        Self {
            severity,
            frequency,
            score,
            risk_level: RiskLevel::bucketize(score),
        }
    }
}

/// Criticality computations over an analysis row.
pub struct CriticalityScorer;

impl CriticalityScorer {
    /// Severity G from domino effects plus impacted zones.
    ///
    /// sum <= 2 -> 1, sum <= 4 -> 2, sum <= 6 -> 3, otherwise 4.
    pub fn severity(domino_effects: u32, impacted_zones: u32) -> u8 {
        match domino_effects.saturating_add(impacted_zones) {
            0..=2 => 1,
            3..=4 => 2,
            5..=6 => 3,
            _ => MAX_FACTOR,
        }
    }

    /// Frequency F: domino effects capped at 4.
    pub fn frequency(domino_effects: u32) -> u8 {
        domino_effects.min(MAX_FACTOR as u32) as u8
    }

    /// Scores a row.
    pub fn score(row: &AnalysisRow) -> CriticalityScore {
        CriticalityScore::from_factors(
            Self::severity(row.domino_effects, row.impacted_zones),
            Self::frequency(row.domino_effects),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hazard::NatureCategory;
    use proptest::prelude::*;

    fn row(domino_effects: u32, impacted_zones: u32) -> AnalysisRow {
        AnalysisRow {
            scenario_label: "test".to_string(),
            nature: NatureCategory::Technical,
            domino_effects,
            impacted_zones,
            node_count: domino_effects.max(1),
        }
    }

    #[test]
    fn severity_thresholds() {
        assert_eq!(CriticalityScorer::severity(1, 1), 1);
        assert_eq!(CriticalityScorer::severity(2, 1), 2);
        assert_eq!(CriticalityScorer::severity(2, 2), 2);
        assert_eq!(CriticalityScorer::severity(3, 2), 3);
        assert_eq!(CriticalityScorer::severity(3, 3), 3);
        assert_eq!(CriticalityScorer::severity(4, 3), 4);
        assert_eq!(CriticalityScorer::severity(40, 5), 4);
    }

    #[test]
    fn frequency_is_capped_at_four() {
        assert_eq!(CriticalityScorer::frequency(0), 0);
        assert_eq!(CriticalityScorer::frequency(3), 3);
        assert_eq!(CriticalityScorer::frequency(4), 4);
        assert_eq!(CriticalityScorer::frequency(12), 4);
    }

    #[test]
    fn three_dominos_three_zones_is_high() {
        let score = CriticalityScorer::score(&row(3, 3));
        assert_eq!(score.severity, 3);
        assert_eq!(score.frequency, 3);
        assert_eq!(score.score, 9);
        assert_eq!(score.risk_level, RiskLevel::High);
        assert_eq!(score.risk_level.grid_color(), "#ff8a65");
    }

    #[test]
    fn maximum_score_is_extreme() {
        let score = CriticalityScorer::score(&row(6, 5));
        assert_eq!(score.score, 16);
        assert_eq!(score.risk_level, RiskLevel::Extreme);
    }

    #[test]
    fn lone_damage_node_has_unknown_risk() {
        let score = CriticalityScorer::score(&row(0, 3));
        assert_eq!(score.frequency, 0);
        assert_eq!(score.score, 0);
        assert_eq!(score.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(RiskLevel::bucketize(0), RiskLevel::Unknown);
        assert_eq!(RiskLevel::bucketize(1), RiskLevel::Low);
        assert_eq!(RiskLevel::bucketize(3), RiskLevel::Low);
        assert_eq!(RiskLevel::bucketize(4), RiskLevel::Moderate);
        assert_eq!(RiskLevel::bucketize(6), RiskLevel::Moderate);
        assert_eq!(RiskLevel::bucketize(7), RiskLevel::High);
        assert_eq!(RiskLevel::bucketize(12), RiskLevel::High);
        assert_eq!(RiskLevel::bucketize(13), RiskLevel::Extreme);
        assert_eq!(RiskLevel::bucketize(16), RiskLevel::Extreme);
        assert_eq!(RiskLevel::bucketize(17), RiskLevel::Unknown);
    }

    #[test]
    fn ranges_agree_with_bucketize() {
        for level in RiskLevel::BUCKETS {
            for score in level.range().unwrap() {
                assert_eq!(RiskLevel::bucketize(score), level);
            }
        }
        assert!(RiskLevel::Unknown.range().is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(RiskLevel::Moderate.label(), "Modéré");
        assert_eq!(RiskLevel::Extreme.color(), "#B71C1C");
    }

    proptest! {
        #[test]
        fn score_is_product_of_bounded_factors(domino in 0u32..50, zones in 0u32..8) {
            let score = CriticalityScorer::score(&row(domino, zones));
            prop_assert!((1..=4).contains(&score.severity));
            prop_assert!(score.frequency <= 4);
            prop_assert_eq!(score.score, score.severity * score.frequency);
            prop_assert_eq!(score.risk_level, RiskLevel::bucketize(score.score));
        }

        #[test]
        fn nonzero_dominos_never_score_unknown(domino in 1u32..50, zones in 0u32..8) {
            let score = CriticalityScorer::score(&row(domino, zones));
            prop_assert_ne!(score.risk_level, RiskLevel::Unknown);
        }
    }
}
