//! Analysis Module - Pure domain services for scenario risk analysis.
//!
//! Every function here is total and side-effect free: it takes a hazard
//! graph (or the row derived from it) and returns computed results. There is
//! no I/O, so no ports are involved.
//!
//! # Components
//!
//! - `GraphSummarizer` - Nature, domino effects and impacted zones of a node list
//! - `IntensificationClassifier` - Escalation tier from the impacted-zone count
//! - `BarrierResolver` - Required technical/organizational barriers per grid cell
//! - `CriticalityScorer` - Severity x frequency score and its risk bucket
//! - `ScenarioAnalyzer` - Composes the four into a `RiskAssessment`
//! - `NegotiationGrid` / `CriticalityGrid` - Display projections of an assessment

mod analysis_row;
mod assessment;
mod barrier_resolver;
mod criticality;
mod graph_summarizer;
mod grids;
mod intensification;

pub use analysis_row::AnalysisRow;
pub use assessment::{
    RiskAssessment, ScenarioAnalyzer, IMPORTED_SCENARIO_LABEL, MANUAL_GRAPH_LABEL,
};
pub use barrier_resolver::{BarrierRequirement, BarrierResolver};
pub use criticality::{CriticalityScore, CriticalityScorer, RiskLevel, MAX_FACTOR};
pub use graph_summarizer::GraphSummarizer;
pub use grids::{
    CriticalityCell, CriticalityGrid, NegotiationCell, NegotiationGrid, NegotiationRow,
    HIGHLIGHT_COLOR,
};
pub use intensification::{IntensificationClassifier, IntensificationLevel, ESCALATING_SCENARIO};
