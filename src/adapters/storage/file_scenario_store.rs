//! File-based Scenario Store Adapter
//!
//! Stores each scenario as one JSON file named after its ID:
//!
//! ```text
//! <base_path>/
//!   3f2b...e1.json
//!   9a0c...44.json
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_scenario_store::newest_first;
use crate::domain::foundation::ScenarioId;
use crate::domain::scenario::{Scenario, ScenarioSummary};
use crate::ports::{ScenarioStore, ScenarioStoreError};

const EXTENSION: &str = "json";

/// File-based storage for scenarios
#[derive(Debug, Clone)]
pub struct FileScenarioStore {
    base_path: PathBuf,
}

impl FileScenarioStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn scenario_path(&self, id: &ScenarioId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, EXTENSION))
    }

    async fn read_scenario(path: &Path) -> Result<Scenario, ScenarioStoreError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| ScenarioStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| ScenarioStoreError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl ScenarioStore for FileScenarioStore {
    async fn save(&self, scenario: &Scenario) -> Result<(), ScenarioStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ScenarioStoreError::IoError(e.to_string()))?;

        let file_path = self.scenario_path(scenario.id());
        if file_path.exists() {
            return Err(ScenarioStoreError::AlreadyExists(*scenario.id()));
        }

        let json = serde_json::to_string_pretty(scenario)
            .map_err(|e| ScenarioStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&file_path, json)
            .await
            .map_err(|e| ScenarioStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, ScenarioStoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| ScenarioStoreError::IoError(e.to_string()))?;

        let mut summaries = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ScenarioStoreError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }

            // One corrupt file must not hide every other scenario.
            match Self::read_scenario(&path).await {
                Ok(scenario) => summaries.push(scenario.summary()),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable scenario file"),
            }
        }

        newest_first(&mut summaries);
        Ok(summaries)
    }

    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>, ScenarioStoreError> {
        let file_path = self.scenario_path(id);
        if !file_path.exists() {
            return Ok(None);
        }

        Self::read_scenario(&file_path).await.map(Some)
    }
}
