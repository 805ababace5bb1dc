//! Scenario command and query handlers.

mod analyze_saved_scenario;
mod get_scenario;
mod list_scenarios;
mod save_scenario;

pub use analyze_saved_scenario::{AnalyzeSavedScenarioHandler, AnalyzeSavedScenarioQuery};
pub use get_scenario::{GetScenarioHandler, GetScenarioQuery};
pub use list_scenarios::ListScenariosHandler;
pub use save_scenario::{SaveScenarioCommand, SaveScenarioHandler};
