//! Analysis query handlers.

mod analyze_graph;
mod report;

pub use analyze_graph::{AnalysisInput, AnalyzeGraphHandler, AnalyzeGraphQuery};
pub use report::AnalysisReport;
