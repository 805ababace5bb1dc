//! HTTP adapter for ad-hoc analysis.
//!
//! - `POST /api/analysis` - Analyse a node list or an editor document

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, AnalysisRowResponse, AnalyzeRequest, BarriersResponse,
    CriticalityResponse, IntensificationResponse,
};
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
