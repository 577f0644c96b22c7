//! Catalog mutation errors.

use thiserror::Error;

/// Errors raised by event catalog mutations.
///
/// Both are recoverable: the caller surfaces them to the operator and the
/// catalog is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Event '{0}' already exists")]
    DuplicateEvent(String),

    #[error("Event '{0}' not found")]
    NotFound(String),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
