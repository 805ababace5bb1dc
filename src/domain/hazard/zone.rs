//! Subsystem zones of the loading terminal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed hazard subsystems a code may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "SS1", alias = "ss1")]
    StorageTank,
    #[serde(rename = "SS2", alias = "ss2")]
    PumpAndLoading,
    #[serde(rename = "SS3", alias = "ss3")]
    Vessel,
    #[serde(rename = "SS4", alias = "ss4")]
    Operator,
    #[serde(rename = "SS5", alias = "ss5")]
    Environment,
}

impl Zone {
    /// All zones, in subsystem order.
    pub const ALL: [Zone; 5] = [
        Zone::StorageTank,
        Zone::PumpAndLoading,
        Zone::Vessel,
        Zone::Operator,
        Zone::Environment,
    ];

    /// Subsystem identifier ("SS1".."SS5").
    pub fn id(&self) -> &'static str {
        match self {
            Zone::StorageTank => "SS1",
            Zone::PumpAndLoading => "SS2",
            Zone::Vessel => "SS3",
            Zone::Operator => "SS4",
            Zone::Environment => "SS5",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Zone::StorageTank => "Storage tank and its equipment",
            Zone::PumpAndLoading => "Pump and loading station",
            Zone::Vessel => "Tanker vessel and its equipment",
            Zone::Operator => "Operator",
            Zone::Environment => "Environment",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_ids_are_sequential() {
        let ids: Vec<_> = Zone::ALL.iter().map(Zone::id).collect();
        assert_eq!(ids, vec!["SS1", "SS2", "SS3", "SS4", "SS5"]);
    }

    #[test]
    fn zone_deserializes_from_either_case() {
        let upper: Zone = serde_json::from_str("\"SS3\"").unwrap();
        let lower: Zone = serde_json::from_str("\"ss3\"").unwrap();
        assert_eq!(upper, Zone::Vessel);
        assert_eq!(lower, Zone::Vessel);
    }
}
