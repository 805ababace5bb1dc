//! Hazard Module - Vocabulary of hazard-scenario graphs.
//!
//! # Components
//!
//! - `HazardCode` - Identifier of a causal or consequence factor
//! - `Zone` - The five subsystems of the loading terminal
//! - `NatureCategory` - Causal nature of a factor
//! - `HazardCatalog` - Shared, immutable zone/nature reference data
//! - `ScenarioDocument` - The editor's serialized graph
//! - `HazardGraph` - Ordered node set handed to the analysis

mod catalog;
mod code;
mod document;
mod graph;
mod nature;
mod zone;

pub use catalog::{CatalogError, HazardCatalog};
pub use code::HazardCode;
pub use document::{
    ElementData, ElementGroup, ElementStyle, GraphElement, Position, ScenarioDocument,
};
pub use graph::HazardGraph;
pub use nature::NatureCategory;
pub use zone::Zone;
