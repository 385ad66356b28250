//! Error types for mtflab

use thiserror::Error;

use crate::list::Element;

/// Error type for list-state operations.
///
/// Both variants are caller contract violations: request sequences must
/// only reference elements of the initial configuration, and the initial
/// configuration must not repeat an element. Neither is retried or
/// recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The requested element is not a member of the tracked list.
    #[error("element {0} is not in the list")]
    ElementNotFound(Element),

    /// The initial configuration contains the same element twice.
    #[error("element {0} appears more than once in the initial configuration")]
    DuplicateElement(Element),
}

/// Result type alias for mtflab core operations
pub type Result<T> = std::result::Result<T, AccessError>;
