//! Scenario Store Port - Interface for persisting saved scenarios.
//!
//! Implemented by the in-memory, file and PostgreSQL adapters. Scenarios
//! are write-once: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::ScenarioId;
use crate::domain::scenario::{Scenario, ScenarioError, ScenarioSummary};

/// Errors that can occur during scenario storage operations
#[derive(Debug, thiserror::Error)]
pub enum ScenarioStoreError {
    #[error("Scenario already exists: {0}")]
    AlreadyExists(ScenarioId),

    #[error("Failed to serialize scenario: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize scenario: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ScenarioStoreError> for ScenarioError {
    fn from(err: ScenarioStoreError) -> Self {
        ScenarioError::infrastructure(err.to_string())
    }
}

/// Port for saving and loading scenarios
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// Save a new scenario.
    ///
    /// # Errors
    /// - `AlreadyExists` if a scenario with the same ID is stored
    /// - any I/O or database failure
    async fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError>;

    /// List all scenarios, newest first.
    async fn list(&self) -> Result<Vec<ScenarioSummary>, ScenarioStoreError>;

    /// Find a scenario by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, ScenarioStoreError>;
}
