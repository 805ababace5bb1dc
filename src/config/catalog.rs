//! Hazard catalog configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::{ConfigError, ValidationError};
use crate::domain::hazard::HazardCatalog;

/// Where the hazard vocabulary comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => {
                Err(ValidationError::CatalogNotFound(path.display().to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Loads the configured catalog, or the built-in one when no path is set.
    pub fn load(&self) -> Result<Arc<HazardCatalog>, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(HazardCatalog::standard());
        };

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = HazardCatalog::from_yaml(&yaml)
            .map_err(|e| ConfigError::Catalog(format!("{}: {}", path.display(), e)))?;

        Ok(Arc::new(catalog))
    }
}
