//! Pagination module
//!
//! Offset-based windowing over an in-memory record sequence with opaque
//! continuation tokens.
//!
//! # Overview
//!
//! A page token is the standard base64 encoding of a zero-based start
//! offset. The [`Paginator`] decodes the token, slices one window of at
//! most `page_size` records and encodes the offset of the following window
//! as the next token. Each call is stateless: the result is fully determined
//! by `(records, token)`.

mod paginator;
mod token;
mod types;

pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
pub use token::{decode_page_token, encode_offset, encode_page_token};
pub use types::{Pages, Window};
