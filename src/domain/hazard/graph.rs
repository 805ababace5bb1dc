//! Hazard graph - the node set one analysis runs on.

use serde::{Deserialize, Serialize};

use super::HazardCode;
use crate::domain::foundation::ValidationError;

/// Ordered hazard codes currently present in a scenario.
///
/// Order is construction order and matters: the nature of a scenario is read
/// from its first node. Node ids are expected to be unique; duplicates are a
/// caller error and are not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardGraph {
    nodes: Vec<HazardCode>,
}

impl HazardGraph {
    pub fn new(nodes: Vec<HazardCode>) -> Self {
        Self { nodes }
    }

    /// Builds a graph from raw node ids, rejecting blank ids.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes = ids
            .into_iter()
            .map(HazardCode::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[HazardCode] {
        &self.nodes
    }

    pub fn first(&self) -> Option<&HazardCode> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.nodes.iter().any(|n| n.as_str() == code)
    }

    /// True when the terminal damage node is present.
    pub fn has_damage(&self) -> bool {
        self.nodes.iter().any(HazardCode::is_damage)
    }
}
