//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod scenario;

pub use analysis::{AnalysisInput, AnalysisReport, AnalyzeGraphHandler, AnalyzeGraphQuery};
pub use scenario::{
    AnalyzeSavedScenarioHandler, AnalyzeSavedScenarioQuery, GetScenarioHandler, GetScenarioQuery,
    ListScenariosHandler, SaveScenarioCommand, SaveScenarioHandler,
};
