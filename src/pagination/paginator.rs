//! Fixed-size windowing over a record slice

use super::token::{decode_page_token, encode_offset};
use super::types::{Pages, Window};
use crate::error::{Error, Result};
use crate::types::{FetchResponse, Folder};
use std::sync::Arc;
use tracing::debug;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Slices record sequences into windows of `page_size` records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    /// Create a paginator; a page size of zero is rejected
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_argument("page size must be at least 1"));
        }
        Ok(Self { page_size })
    }

    /// Maximum number of records per window
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Borrow the window addressed by `page_token`
    ///
    /// An empty token selects the first window. A start offset at or past
    /// the end of `records` yields an empty final window rather than an error.
    pub fn window<'a, T>(&self, records: &'a [T], page_token: &str) -> Result<Window<'a, T>> {
        let requested = if page_token.is_empty() {
            0
        } else {
            decode_page_token(page_token)?
        };

        let len = records.len();
        let start = requested.min(len);
        let end = start.saturating_add(self.page_size).min(len);

        let next_page_token = if end < len {
            encode_offset(end)?
        } else {
            String::new()
        };

        debug!(
            requested,
            start,
            end,
            total = len,
            last = next_page_token.is_empty(),
            "Sliced page window"
        );

        Ok(Window {
            items: &records[start..end],
            start,
            end,
            next_page_token,
        })
    }

    /// Return one page of folders as a response envelope
    ///
    /// The response shares the folders with `folders`; nothing is copied.
    pub fn paginate(&self, folders: &[Arc<Folder>], page_token: &str) -> Result<FetchResponse> {
        let window = self.window(folders, page_token)?;
        Ok(FetchResponse::new(
            window.items.to_vec(),
            window.next_page_token,
        ))
    }

    /// Iterate over every window of `records`
    pub fn pages<'a, T>(&self, records: &'a [T]) -> Pages<'a, T> {
        Pages::new(*self, records)
    }
}
