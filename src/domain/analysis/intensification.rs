//! Intensification Classifier - Escalation tier from the impacted-zone count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative escalation tier of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensificationLevel {
    LessIntense,
    Intense,
    VeryIntense,
}

impl IntensificationLevel {
    /// Levels in grid order.
    pub const ALL: [IntensificationLevel; 3] = [
        IntensificationLevel::LessIntense,
        IntensificationLevel::Intense,
        IntensificationLevel::VeryIntense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IntensificationLevel::LessIntense => "Moins intense",
            IntensificationLevel::Intense => "Intense",
            IntensificationLevel::VeryIntense => "Très intense",
        }
    }

    /// Row background in the negotiation grid.
    pub fn color(&self) -> &'static str {
        match self {
            IntensificationLevel::LessIntense => "#d0f0c0",
            IntensificationLevel::Intense => "#fff59d",
            IntensificationLevel::VeryIntense => "#ef9a9a",
        }
    }
}

impl fmt::Display for IntensificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scenario that escalates to `VeryIntense` at four impacted zones.
pub const ESCALATING_SCENARIO: &str = "S11";

/// Maps an impacted-zone count to an intensification level.
pub struct IntensificationClassifier;

impl IntensificationClassifier {
    /// Classifies a scenario.
    ///
    /// | zones | level |
    /// |-------|-------|
    /// | 0..=2 | LessIntense |
    /// | 3 | Intense |
    /// | 4 | VeryIntense for "S11", Intense otherwise |
    /// | 5 | VeryIntense |
    /// | >5 | Intense |
    pub fn classify(impacted_zones: u32, scenario_label: &str) -> IntensificationLevel {
        match impacted_zones {
            0..=2 => IntensificationLevel::LessIntense,
            3 => IntensificationLevel::Intense,
            4 if scenario_label == ESCALATING_SCENARIO => IntensificationLevel::VeryIntense,
            4 => IntensificationLevel::Intense,
            5 => IntensificationLevel::VeryIntense,
            _ => IntensificationLevel::Intense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_to_two_zones_is_less_intense() {
        for zones in 0..=2 {
            assert_eq!(
                IntensificationClassifier::classify(zones, "S1"),
                IntensificationLevel::LessIntense
            );
        }
    }

    #[test]
    fn three_zones_is_intense() {
        assert_eq!(
            IntensificationClassifier::classify(3, "S11"),
            IntensificationLevel::Intense
        );
    }

    #[test]
    fn four_zones_escalates_only_for_s11() {
        assert_eq!(
            IntensificationClassifier::classify(4, "S11"),
            IntensificationLevel::VeryIntense
        );
        assert_eq!(
            IntensificationClassifier::classify(4, "other"),
            IntensificationLevel::Intense
        );
        assert_eq!(
            IntensificationClassifier::classify(4, "s11"),
            IntensificationLevel::Intense
        );
    }

    #[test]
    fn five_zones_is_very_intense() {
        assert_eq!(
            IntensificationClassifier::classify(5, "anything"),
            IntensificationLevel::VeryIntense
        );
    }

    #[test]
    fn more_than_five_zones_falls_back_to_intense() {
        assert_eq!(
            IntensificationClassifier::classify(6, "anything"),
            IntensificationLevel::Intense
        );
        assert_eq!(
            IntensificationClassifier::classify(6, ESCALATING_SCENARIO),
            IntensificationLevel::Intense
        );
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(IntensificationLevel::VeryIntense.label(), "Très intense");
        assert_eq!(IntensificationLevel::LessIntense.color(), "#d0f0c0");
    }
}
