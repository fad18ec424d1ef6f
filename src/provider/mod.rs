//! Data provider module
//!
//! The filter never knows where folders come from. It asks a
//! [`DataProvider`] for the complete, unfiltered record set and does all
//! selection itself.
//!
//! # Sources
//!
//! - `StaticProvider` - in-memory records, mostly for tests
//! - `JsonFileProvider` - a JSON array of folders on disk
//! - `SampleDataProvider` - the bundled sample dataset

mod sources;
mod types;

pub use sources::{JsonFileProvider, SampleDataProvider, StaticProvider, DEFAULT_ORG_ID};
pub use types::DataProvider;
