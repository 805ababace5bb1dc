//! PostgreSQL implementation of ScenarioStore.
//!
//! The editor document is stored as JSON text; it is only ever read back
//! whole, never queried.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ScenarioId, Timestamp};
use crate::domain::hazard::ScenarioDocument;
use crate::domain::scenario::{Scenario, ScenarioSummary};
use crate::ports::{ScenarioStore, ScenarioStoreError};

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of ScenarioStore.
#[derive(Clone)]
pub struct PostgresScenarioStore {
    pool: PgPool,
}

impl PostgresScenarioStore {
    /// Creates a new PostgresScenarioStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScenarioStore for PostgresScenarioStore {
    async fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError> {
        let document = scenario
            .document()
            .to_json()
            .map_err(|e| ScenarioStoreError::SerializationFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO scenarios (id, name, document, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(scenario.id().as_uuid())
        .bind(scenario.name())
        .bind(document)
        .bind(scenario.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ScenarioStoreError::AlreadyExists(*scenario.id())
            } else {
                tracing::error!(scenario_id = %scenario.id(), error = %e, "Failed to insert scenario");
                ScenarioStoreError::DatabaseError(format!("Failed to insert scenario: {}", e))
            }
        })?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, ScenarioStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM scenarios
            ORDER BY created_at DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list scenarios");
            ScenarioStoreError::DatabaseError(format!("Failed to list scenarios: {}", e))
        })?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, ScenarioStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, document, created_at
            FROM scenarios
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(scenario_id = %id, error = %e, "Failed to fetch scenario");
            ScenarioStoreError::DatabaseError(format!("Failed to fetch scenario: {}", e))
        })?;

        row.map(row_to_scenario).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

fn column_error(column: &str, err: sqlx::Error) -> ScenarioStoreError {
    ScenarioStoreError::DatabaseError(format!("Failed to get {}: {}", column, err))
}

fn row_to_summary(row: sqlx::postgres::PgRow) -> Result<ScenarioSummary, ScenarioStoreError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let name: String = row.try_get("name").map_err(|e| column_error("name", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(ScenarioSummary {
        id: ScenarioId::from_uuid(id),
        name,
        created_at: Timestamp::from_datetime(created_at),
    })
}

fn row_to_scenario(row: sqlx::postgres::PgRow) -> Result<Scenario, ScenarioStoreError> {
    let document: String = row
        .try_get("document")
        .map_err(|e| column_error("document", e))?;
    let document = ScenarioDocument::from_json(&document)
        .map_err(|e| ScenarioStoreError::DeserializationFailed(e.to_string()))?;

    let summary = row_to_summary(row)?;

    Ok(Scenario::reconstitute(
        summary.id,
        summary.name,
        document,
        summary.created_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_errors_name_the_column() {
        let err = column_error("document", sqlx::Error::RowNotFound);
        assert!(err.to_string().contains("Failed to get document"));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
