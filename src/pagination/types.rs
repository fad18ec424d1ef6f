//! Pagination types
//!
//! Borrowed windows over a record slice and an iterator that walks them.

use super::paginator::Paginator;
use crate::error::Result;

/// One page of records, borrowed from the paginated slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a, T> {
    /// Records in this window
    pub items: &'a [T],
    /// Offset of the first record (clamped to the slice length)
    pub start: usize,
    /// Offset one past the last record
    pub end: usize,
    /// Token for the following window, empty on the last page
    pub next_page_token: String,
}

impl<T> Window<'_, T> {
    /// Check if this is the final window
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_empty()
    }

    /// Number of records in this window
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this window holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Iterator over every window of a slice, starting from the first page
///
/// Stops after the window whose next token is empty, or after the first
/// error.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    paginator: Paginator,
    records: &'a [T],
    token: Option<String>,
}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(paginator: Paginator, records: &'a [T]) -> Self {
        Self {
            paginator,
            records,
            token: Some(String::new()),
        }
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Result<Window<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token.take()?;
        match self.paginator.window(self.records, &token) {
            Ok(window) => {
                if !window.is_last() {
                    self.token = Some(window.next_page_token.clone());
                }
                Some(Ok(window))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
