//! Dnevnik Core - record model and shared facilities for the school register
//!
//! This crate provides:
//! - Teacher and Student records as a closed sum type with kind-prefixed labels
//! - Record kind lookup (kind -> table, key column)
//! - Input validation for new students
//! - Secondary identifier (egn) generation
//! - Canonical error and logging facilities shared with the store

pub mod egn;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RegisterError, Result};
pub use model::{label, NewStudent, Person, Record, RecordKind, Student, Teacher};
