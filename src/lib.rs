//! # tenant-folders
//!
//! Tenant-scoped folder retrieval with deterministic, resumable pagination.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tenant_folders::provider::{SampleDataProvider, DEFAULT_ORG_ID};
//! use tenant_folders::{FetchRequest, FolderFetcher};
//!
//! # fn main() -> tenant_folders::Result<()> {
//! let fetcher = FolderFetcher::new(Arc::new(SampleDataProvider::new()?));
//!
//! let mut request = FetchRequest::new(DEFAULT_ORG_ID).paginated();
//! loop {
//!     let page = fetcher.fetch(&request)?;
//!     for folder in &page.folders {
//!         println!("{}", folder.name);
//!     }
//!     if !page.has_next_page() {
//!         break;
//!     }
//!     request = request.with_page_token(page.next_page_token);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──► filter::fetch_folders ──► DataProvider::folders()
//!                    │                  (full, unfiltered set)
//!                    ▼
//!            keep org_id matches
//!                    │ paginate?
//!                    ▼
//!            Paginator::paginate ──► token codec (base64 offset)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Folder, request and response types
pub mod types;

/// Configuration loading
pub mod config;

/// Page token codec and windowing
pub mod pagination;

/// Folder data sources
pub mod provider;

/// Tenant-scoped fetch
pub mod filter;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FolderConfig;
pub use error::{Error, ErrorKind, Result};
pub use filter::{fetch_folders, FolderFetcher};
pub use pagination::{decode_page_token, encode_page_token, Paginator};
pub use provider::DataProvider;
pub use types::{DeletedFilter, FetchRequest, FetchResponse, Folder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
