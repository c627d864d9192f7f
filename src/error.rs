//! Fetch error types
//!
//! A unit only distinguishes "failed" from "succeeded"; every failure is
//! collapsed into the display message of one of these variants.

use thiserror::Error;

/// Errors that can occur while fetching a collection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not a record sequence
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
