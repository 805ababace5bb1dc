//! Scenario aggregate entity.
//!
//! A scenario is a named, saved editor document. It is immutable once
//! created: re-analysing a scenario always reads the document as stored.

use crate::domain::foundation::{DomainError, ScenarioId, Timestamp};
use crate::domain::hazard::ScenarioDocument;
use serde::{Deserialize, Serialize};

/// Maximum length for a scenario name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Scenario aggregate - a saved hazard graph.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` is 1-255 characters, not blank, stored trimmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    id: ScenarioId,
    name: String,
    document: ScenarioDocument,
    created_at: Timestamp,
}

impl Scenario {
    /// Create a new scenario stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank or too long
    pub fn new(
        id: ScenarioId,
        name: impl Into<String>,
        document: ScenarioDocument,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(name.into())?;
        Ok(Self {
            id,
            name,
            document,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a scenario from persistence (no validation).
    pub fn reconstitute(
        id: ScenarioId,
        name: String,
        document: ScenarioDocument,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            document,
            created_at,
        }
    }

    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &ScenarioDocument {
        &self.document
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Listing view of this scenario.
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }

    fn validate_name(name: String) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Scenario name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Scenario name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Listing entry for a saved scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub name: String,
    pub created_at: Timestamp,
}
