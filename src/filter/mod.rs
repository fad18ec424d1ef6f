//! Tenant-scoped folder retrieval
//!
//! Pulls the full record set from a [`DataProvider`](crate::provider::DataProvider),
//! keeps the folders of one organization in source order and optionally
//! hands the result to the [`Paginator`](crate::pagination::Paginator).

mod fetch;

pub use fetch::{fetch_folders, FolderFetcher, FolderFetcherBuilder};

#[cfg(test)]
mod tests;
