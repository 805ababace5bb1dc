//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - In-memory and file-based scenario stores
//! - `postgres` - PostgreSQL scenario store
//! - `http` - axum REST API

pub mod http;
pub mod postgres;
pub mod storage;

pub use postgres::PostgresScenarioStore;
pub use storage::{FileScenarioStore, InMemoryScenarioStore};
