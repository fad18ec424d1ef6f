//! Error types for tenant-folders
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::FetchResponse;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for tenant-folders
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The filter matched nothing. The (empty) response is kept so callers
    /// can treat this as non-fatal.
    #[error("No folders found for organization ID {org_id}")]
    NotFound {
        org_id: Uuid,
        response: FetchResponse,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid page token: {message}")]
    Decode { message: String },

    #[error("Pagination error: {source}")]
    Pagination {
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Data provider error: {message}")]
    Provider { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stable classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Decode,
    Pagination,
    Config,
    Provider,
    Io,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not-found error carrying the empty response
    pub fn not_found(org_id: Uuid, response: FetchResponse) -> Self {
        Self::NotFound { org_id, response }
    }

    /// Create a page token decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Wrap an error raised while paginating
    pub fn pagination(source: Error) -> Self {
        Self::Pagination {
            source: Box::new(source),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a data provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Pagination { .. } => ErrorKind::Pagination,
            Error::Config { .. } | Error::YamlParse(_) => ErrorKind::Config,
            Error::Provider { .. } | Error::JsonParse(_) => ErrorKind::Provider,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Check if this error only reports an empty result
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Recover the response carried by a `NotFound` error
    pub fn into_response(self) -> Option<FetchResponse> {
        match self {
            Error::NotFound { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The innermost cause, looking through `Pagination` wrappers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Pagination { source } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for tenant-folders
pub type Result<T> = std::result::Result<T, Error>;
