//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `hazard` - Hazard vocabulary, zone catalog and the editor document format
//! - `analysis` - Pure domain services for scenario risk analysis
//! - `scenario` - Saved scenario aggregate

pub mod analysis;
pub mod foundation;
pub mod hazard;
pub mod scenario;
