//! Concrete data provider implementations

use super::types::DataProvider;
use crate::error::{Error, Result};
use crate::types::Folder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Organization that owns most of the bundled sample folders
pub const DEFAULT_ORG_ID: Uuid = Uuid::from_u128(0xc155_6e17_b7c0_45a3_a6ae_9546_248f_b17a);

const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

// ============================================================================
// Static Provider
// ============================================================================

/// Serves a fixed, in-memory list of folders
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    folders: Vec<Arc<Folder>>,
}

impl StaticProvider {
    /// Create a provider from owned folders
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> Self {
        Self {
            folders: folders.into_iter().map(Arc::new).collect(),
        }
    }

    /// Create a provider from already shared folders
    pub fn from_shared(folders: Vec<Arc<Folder>>) -> Self {
        Self { folders }
    }
}

impl DataProvider for StaticProvider {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        Ok(self.folders.clone())
    }
}

// ============================================================================
// JSON File Provider
// ============================================================================

/// Reads a JSON array of folders from disk on every call
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider for the given file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for JsonFileProvider {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::provider(format!(
                "Failed to read data file {}: {e}",
                self.path.display()
            ))
        })?;
        let folders = parse_folders(&contents)?;
        debug!(path = %self.path.display(), count = folders.len(), "Loaded folders from file");
        Ok(folders)
    }
}

// ============================================================================
// Sample Data Provider
// ============================================================================

/// Serves the sample dataset compiled into the binary
#[derive(Debug, Clone)]
pub struct SampleDataProvider {
    inner: StaticProvider,
}

impl SampleDataProvider {
    /// Parse the bundled sample dataset
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: StaticProvider::from_shared(parse_folders(SAMPLE_DATA)?),
        })
    }
}

impl DataProvider for SampleDataProvider {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        self.inner.folders()
    }
}

fn parse_folders(json: &str) -> Result<Vec<Arc<Folder>>> {
    let folders: Vec<Folder> = serde_json::from_str(json)?;
    Ok(folders.into_iter().map(Arc::new).collect())
}
