//! Error types for sequence search.

use mtflab_core::AccessError;
use thiserror::Error;

/// Error type for sequence-search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A non-empty sequence was requested over a zero-element state.
    #[error("cannot search request sequences over an empty universe")]
    EmptyUniverse,

    /// An underlying access failed.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Result type alias for mtflab search operations
pub type Result<T> = std::result::Result<T, SearchError>;
