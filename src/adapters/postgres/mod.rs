//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresScenarioStore` - Saved scenarios in the `scenarios` table

mod scenario_store;

pub use scenario_store::PostgresScenarioStore;

use sqlx::PgPool;

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
