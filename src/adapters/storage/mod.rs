//! Storage Adapters
//!
//! Implementations of the ScenarioStore port that need no database.
//!
//! ## Available Adapters
//!
//! - **FileScenarioStore** - One JSON file per scenario on disk
//! - **InMemoryScenarioStore** - Process-local map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileScenarioStore, InMemoryScenarioStore};
//!
//! // Production without PostgreSQL: file-based storage
//! let store = FileScenarioStore::new("./data/scenarios");
//!
//! // Testing: in-memory storage
//! let store = InMemoryScenarioStore::new();
//! ```

mod file_scenario_store;
mod in_memory_scenario_store;

pub use file_scenario_store::FileScenarioStore;
pub use in_memory_scenario_store::InMemoryScenarioStore;
