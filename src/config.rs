//! Configuration for folder retrieval
//!
//! Settings are read from an optional YAML file, then environment
//! overrides, then command-line flags (applied by the CLI).
//!
//! ```yaml
//! page_size: 2
//! default_org_id: c1556e17-b7c0-45a3-a6ae-9546248fb17a
//! data_file: data/sample.json
//! include_deleted: true
//! ```

use crate::error::{Error, Result};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::provider::{DataProvider, JsonFileProvider, SampleDataProvider, DEFAULT_ORG_ID};
use crate::types::DeletedFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Environment variable overriding the page size
pub const PAGE_SIZE_ENV: &str = "TENANT_FOLDERS_PAGE_SIZE";

/// Environment variable overriding the data file
pub const DATA_FILE_ENV: &str = "TENANT_FOLDERS_DATA_FILE";

/// Folder retrieval settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    /// Records per page in paginated mode
    pub page_size: usize,

    /// Organization used when none is given on the command line
    pub default_org_id: Uuid,

    /// JSON file with folder records (bundled sample data if unset)
    pub data_file: Option<PathBuf>,

    /// Whether soft-deleted folders are returned
    pub include_deleted: bool,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_org_id: DEFAULT_ORG_ID,
            data_file: None,
            include_deleted: true,
        }
    }
}

impl FolderConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            self.page_size = raw.trim().parse().map_err(|e| {
                Error::config(format!("{PAGE_SIZE_ENV} must be a positive integer: {e}"))
            })?;
        }
        if let Some(path) = lookup(DATA_FILE_ENV) {
            self.data_file = Some(PathBuf::from(path));
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the configuration for invalid values
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        if self.default_org_id.is_nil() {
            return Err(Error::config("default_org_id must not be the nil UUID"));
        }
        Ok(())
    }

    /// Build the paginator for this configuration
    pub fn paginator(&self) -> Result<Paginator> {
        Paginator::new(self.page_size)
    }

    /// Soft-delete handling for requests built from this configuration
    pub fn deleted_filter(&self) -> DeletedFilter {
        if self.include_deleted {
            DeletedFilter::Include
        } else {
            DeletedFilter::Exclude
        }
    }

    /// Build the data provider for this configuration
    pub fn provider(&self) -> Result<Arc<dyn DataProvider>> {
        let provider: Arc<dyn DataProvider> = match &self.data_file {
            Some(path) => Arc::new(JsonFileProvider::new(path)),
            None => Arc::new(SampleDataProvider::new()?),
        };
        Ok(provider)
    }
}
