//! In-Memory Scenario Store Adapter
//!
//! Keeps saved scenarios in a process-local map.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ScenarioId;
use crate::domain::scenario::{Scenario, ScenarioSummary};
use crate::ports::{ScenarioStore, ScenarioStoreError};

/// In-memory storage for scenarios
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioStore {
    scenarios: Arc<RwLock<HashMap<ScenarioId, Scenario>>>,
}

impl InMemoryScenarioStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored scenarios (useful for tests)
    pub async fn clear(&self) {
        self.scenarios.write().await.clear();
    }

    /// Get the number of stored scenarios
    pub async fn len(&self) -> usize {
        self.scenarios.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scenarios.read().await.is_empty()
    }
}

/// Orders summaries newest first.
pub(crate) fn newest_first(summaries: &mut [ScenarioSummary]) {
    summaries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[async_trait]
impl ScenarioStore for InMemoryScenarioStore {
    async fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError> {
        let mut scenarios = self.scenarios.write().await;
        if scenarios.contains_key(scenario.id()) {
            return Err(ScenarioStoreError::AlreadyExists(*scenario.id()));
        }
        scenarios.insert(*scenario.id(), scenario.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, ScenarioStoreError> {
        let scenarios = self.scenarios.read().await;
        let mut summaries: Vec<_> = scenarios.values().map(Scenario::summary).collect();
        newest_first(&mut summaries);
        Ok(summaries)
    }

    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, ScenarioStoreError> {
        Ok(self.scenarios.read().await.get(id).cloned())
    }
}
