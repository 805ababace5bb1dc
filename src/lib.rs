//! Scenario Risk - Hazard-scenario graph analysis
//!
//! This crate turns a causal hazard graph drawn for an oil-terminal site into
//! a danger-matrix row, an intensification level, the safety barriers the
//! negotiation grid requires, and a severity x frequency criticality score.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
