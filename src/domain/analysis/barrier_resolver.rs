//! Barrier Resolver - Required safety barriers per intensification and zone count.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::IntensificationLevel;

/// Number of technical (BT) and organizational/human (BU) barriers required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarrierRequirement {
    pub technical: u8,
    pub organizational: u8,
}

impl BarrierRequirement {
    pub const fn new(technical: u8, organizational: u8) -> Self {
        Self {
            technical,
            organizational,
        }
    }

    pub fn total(&self) -> u8 {
        self.technical + self.organizational
    }
}

impl fmt::Display for BarrierRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BT + {} BU", self.technical, self.organizational)
    }
}

/// Safety-objective negotiation grid lookup.
pub struct BarrierResolver;

impl BarrierResolver {
    /// Largest zone count the grid has columns for.
    pub const MAX_ZONES: u32 = 5;

    /// Looks up the barrier requirement for a grid cell.
    ///
    /// Returns `None` when no safety-barrier policy is defined for the
    /// combination (zone 1 at `Intense`/`VeryIntense`, zone 0, zones above 5).
    /// Missing cells are never interpolated.
    pub fn resolve(level: IntensificationLevel, impacted_zones: u32) -> Option<BarrierRequirement> {
        use IntensificationLevel::*;

        let (technical, organizational) = match (level, impacted_zones) {
            (LessIntense, 1) => (0, 1),
            (LessIntense, 2) => (1, 1),
            (LessIntense, 3..=5) => (2, 1),
            (Intense, 2 | 3) => (2, 1),
            (Intense, 4 | 5) => (3, 2),
            (VeryIntense, 2 | 3) => (3, 2),
            (VeryIntense, 4) => (4, 5),
            (VeryIntense, 5) => (5, 7),
            _ => return None,
        };

        Some(BarrierRequirement::new(technical, organizational))
    }
}
