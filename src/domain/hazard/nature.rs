//! Causal nature of a hazard factor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Causal-nature category attached to each hazard code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatureCategory {
    #[serde(alias = "Humain")]
    Human,
    #[serde(alias = "Technique")]
    Technical,
    #[serde(alias = "Technique/organisationnel")]
    TechnicalOrganizational,
    #[serde(alias = "Naturel")]
    Natural,
    #[default]
    #[serde(alias = "Inconnu")]
    Unknown,
}

impl NatureCategory {
    /// Display label used in the danger matrix.
    pub fn label(&self) -> &'static str {
        match self {
            NatureCategory::Human => "Humain",
            NatureCategory::Technical => "Technique",
            NatureCategory::TechnicalOrganizational => "Technique/organisationnel",
            NatureCategory::Natural => "Naturel",
            NatureCategory::Unknown => "Inconnu",
        }
    }
}

impl fmt::Display for NatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "humain" => Ok(NatureCategory::Human),
            "technical" | "technique" => Ok(NatureCategory::Technical),
            "technical_organizational" | "technical/organizational"
            | "technique/organisationnel" => Ok(NatureCategory::TechnicalOrganizational),
            "natural" | "naturel" => Ok(NatureCategory::Natural),
            "unknown" | "inconnu" => Ok(NatureCategory::Unknown),
            _ => Err(format!("Unknown nature category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_danger_matrix() {
        assert_eq!(NatureCategory::Human.label(), "Humain");
        assert_eq!(
            NatureCategory::TechnicalOrganizational.label(),
            "Technique/organisationnel"
        );
        assert_eq!(NatureCategory::Unknown.to_string(), "Inconnu");
    }

    #[test]
    fn parses_english_and_french_names() {
        assert_eq!("Naturel".parse::<NatureCategory>(), Ok(NatureCategory::Natural));
        assert_eq!("technical".parse::<NatureCategory>(), Ok(NatureCategory::Technical));
        assert!("volcanic".parse::<NatureCategory>().is_err());
    }

    #[test]
    fn serde_accepts_french_alias() {
        let nature: NatureCategory = serde_json::from_str("\"Humain\"").unwrap();
        assert_eq!(nature, NatureCategory::Human);
        assert_eq!(serde_json::to_string(&nature).unwrap(), "\"human\"");
    }
}
