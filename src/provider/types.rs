//! Data provider trait

use crate::error::Result;
use crate::types::Folder;
use std::sync::Arc;

/// Supplies the complete, unfiltered set of folder records
///
/// Implementations must be safe to read from several callers at once.
pub trait DataProvider: Send + Sync {
    /// Return every folder the source knows about, in source order
    fn folders(&self) -> Result<Vec<Arc<Folder>>>;
}

impl<P: DataProvider + ?Sized> DataProvider for Arc<P> {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        (**self).folders()
    }
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        (**self).folders()
    }
}
