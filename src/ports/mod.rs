//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScenarioStore` - Persistence of saved scenarios

mod scenario_store;

pub use scenario_store::{ScenarioStore, ScenarioStoreError};
