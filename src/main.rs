//! Scenario Risk API server.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scenario_risk::adapters::http::{api_router, AppState};
use scenario_risk::adapters::postgres::{run_migrations, PostgresScenarioStore};
use scenario_risk::adapters::storage::{FileScenarioStore, InMemoryScenarioStore};
use scenario_risk::config::{
    AppConfig, DatabaseConfig, ServerConfig, StorageBackend, ValidationError,
};
use scenario_risk::domain::analysis::ScenarioAnalyzer;
use scenario_risk::ports::ScenarioStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let catalog = config.catalog.load()?;
    info!(
        custom = config.catalog.path.is_some(),
        "Hazard catalog loaded"
    );

    let store = build_store(&config).await?;
    let analyzer = Arc::new(ScenarioAnalyzer::new(catalog));
    let app = api_router(AppState::new(store, analyzer), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere.
/// `RUST_LOG` overrides `server.log_level`.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn ScenarioStore>, Box<dyn Error>> {
    let store: Arc<dyn ScenarioStore> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory scenario store");
            Arc::new(InMemoryScenarioStore::new())
        }
        StorageBackend::File => {
            info!(data_dir = %config.storage.data_dir.display(), "Using file scenario store");
            Arc::new(FileScenarioStore::new(&config.storage.data_dir))
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("DATABASE__URL"))?;
            Arc::new(connect_postgres(database).await?)
        }
    };
    Ok(store)
}

async fn connect_postgres(database: &DatabaseConfig) -> Result<PostgresScenarioStore, Box<dyn Error>> {
    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    info!("Using PostgreSQL scenario store");
    Ok(PostgresScenarioStore::new(pool))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
