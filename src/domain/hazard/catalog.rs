//! Hazard Catalog - Zone membership and causal nature of every hazard code.
//!
//! The catalog is reference data: it is built once at start-up and shared
//! read-only by every analysis. `HazardCatalog::standard()` returns the
//! terminal's built-in vocabulary; deployments with a different vocabulary
//! can load one from YAML with [`HazardCatalog::from_yaml`].
//!
//! # YAML format
//!
//! ```yaml
//! zones:
//!   SS1: [DV, DP, Ic, Ex, Dg]
//!   SS4: [MF, FS, ANC, MB]
//! natures:
//!   DV: technical
//!   MF: Humain
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;

use super::{HazardCode, NatureCategory, Zone};
use crate::domain::foundation::ValidationError;

/// Zone membership of the built-in vocabulary.
const STANDARD_ZONES: &[(Zone, &[&str])] = &[
    (Zone::StorageTank, &["DV", "DP", "Ic", "Ex", "Dg"]),
    (Zone::PumpAndLoading, &["Ch", "MB", "DP", "Ic", "Ex", "Dg"]),
    (Zone::Vessel, &["DN", "FC", "DP", "Ic", "Ex", "Dg"]),
    (Zone::Operator, &["MF", "FS", "ANC", "MB"]),
    (Zone::Environment, &["TO", "GV"]),
];

/// Causal nature of the built-in vocabulary.
const STANDARD_NATURES: &[(&str, NatureCategory)] = &[
    ("MF", NatureCategory::Human),
    ("DV", NatureCategory::Technical),
    ("DN", NatureCategory::TechnicalOrganizational),
    ("DP", NatureCategory::Technical),
    ("Ic", NatureCategory::Human),
    ("Ex", NatureCategory::Technical),
    ("Dg", NatureCategory::Technical),
    ("Ch", NatureCategory::Technical),
    ("MB", NatureCategory::Human),
    ("FC", NatureCategory::Technical),
    ("FS", NatureCategory::Human),
    ("ANC", NatureCategory::Human),
    ("TO", NatureCategory::Natural),
    ("GV", NatureCategory::Natural),
];

static STANDARD: Lazy<Arc<HazardCatalog>> = Lazy::new(|| Arc::new(HazardCatalog::build_standard()));

/// Errors raised while loading a catalog from YAML.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid hazard code in catalog: {0}")]
    InvalidCode(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    zones: BTreeMap<Zone, Vec<String>>,
    #[serde(default)]
    natures: BTreeMap<String, NatureCategory>,
}

/// Immutable lookup of zone membership and nature per hazard code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HazardCatalog {
    zones: BTreeMap<Zone, BTreeSet<HazardCode>>,
    natures: HashMap<HazardCode, NatureCategory>,
}

impl HazardCatalog {
    /// The process-wide built-in catalog.
    pub fn standard() -> Arc<HazardCatalog> {
        Arc::clone(&STANDARD)
    }

    fn build_standard() -> Self {
        let zones = STANDARD_ZONES
            .iter()
            .map(|(zone, codes)| {
                let members = codes
                    .iter()
                    .filter_map(|code| HazardCode::new(*code).ok())
                    .collect();
                (*zone, members)
            })
            .collect();

        let natures = STANDARD_NATURES
            .iter()
            .filter_map(|(code, nature)| HazardCode::new(*code).ok().map(|c| (c, *nature)))
            .collect();

        Self { zones, natures }
    }

    /// Loads a catalog from its YAML representation.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;

        let mut zones = BTreeMap::new();
        for (zone, codes) in file.zones {
            let members = codes
                .into_iter()
                .map(HazardCode::new)
                .collect::<Result<BTreeSet<_>, _>>()?;
            zones.insert(zone, members);
        }

        let mut natures = HashMap::new();
        for (code, nature) in file.natures {
            natures.insert(HazardCode::new(code)?, nature);
        }

        Ok(Self { zones, natures })
    }

    /// Nature of a code; unknown codes map to `NatureCategory::Unknown`.
    pub fn nature_of(&self, code: &str) -> NatureCategory {
        self.natures.get(code).copied().unwrap_or_default()
    }

    /// Zones that list `code` as a member, in zone order.
    pub fn zones_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = Zone> + 'a {
        self.zones
            .iter()
            .filter(move |(_, members)| members.contains(code))
            .map(|(zone, _)| *zone)
    }

    /// Members of a zone, empty when the zone is not configured.
    pub fn members(&self, zone: Zone) -> impl Iterator<Item = &HazardCode> {
        self.zones.get(&zone).into_iter().flatten()
    }

    /// True when the code appears in any zone or has a declared nature.
    pub fn knows(&self, code: &str) -> bool {
        self.natures.contains_key(code) || self.zones_of(code).next().is_some()
    }
}
