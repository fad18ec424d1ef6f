//! Page token codec
//!
//! Tokens are the standard base64 encoding of a base-10 offset. Only the
//! canonical form produced by [`encode_page_token`] decodes successfully.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode a start offset as an opaque page token
pub fn encode_page_token(offset: i64) -> Result<String> {
    if offset < 0 {
        return Err(Error::invalid_argument(format!(
            "invalid index: {offset} (must be non-negative)"
        )));
    }
    Ok(STANDARD.encode(offset.to_string()))
}

/// Encode a slice offset as an opaque page token
pub fn encode_offset(offset: usize) -> Result<String> {
    let offset = i64::try_from(offset).map_err(|_| {
        Error::invalid_argument(format!("offset {offset} does not fit a page token"))
    })?;
    encode_page_token(offset)
}

/// Decode a page token back into a start offset
pub fn decode_page_token(token: &str) -> Result<usize> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| Error::decode(format!("{token:?} is not base64: {e}")))?;

    let payload = std::str::from_utf8(&bytes)
        .map_err(|_| Error::decode(format!("{token:?} does not hold a UTF-8 payload")))?;

    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::decode(format!(
            "payload {payload:?} is not a non-negative integer"
        )));
    }

    // Leading zeros would let two tokens name the same offset
    if payload.len() > 1 && payload.starts_with('0') {
        return Err(Error::decode(format!(
            "payload {payload:?} is not in canonical form"
        )));
    }

    payload
        .parse::<usize>()
        .map_err(|e| Error::decode(format!("offset {payload} out of range: {e}")))
}
