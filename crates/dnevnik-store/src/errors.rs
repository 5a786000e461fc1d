//! Error handling for dnevnik-store
//!
//! Wraps dnevnik-core ExError with store-specific helpers

use dnevnik_core::errors::{ExError, ExErrorKind, RegisterError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a storage-unavailable error for a missing database file
pub fn storage_unavailable(path: &Path) -> ExError {
    RegisterError::StorageUnavailable {
        path: path.display().to_string(),
    }
    .into()
}

/// Create a query error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::QueryFailed)
        .with_op("sqlite")
        .with_message(err.to_string())
}
