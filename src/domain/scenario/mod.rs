//! Scenario domain module.
//!
//! Saved scenarios: a name, the editor document and a creation time.
//! Analysis of a saved scenario is delegated to `domain::analysis`.

mod aggregate;
mod errors;

pub use aggregate::{Scenario, ScenarioSummary, MAX_NAME_LENGTH};
pub use errors::ScenarioError;
