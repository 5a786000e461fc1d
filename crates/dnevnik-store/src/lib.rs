//! Dnevnik Store - SQLite persistence for the school register
//!
//! Provides:
//! - Connection management for the single-file database
//! - Schema bootstrap for the `teachers` and `students` tables
//! - Row hydration into register records
//! - `SqliteRepo`, statement-level access over a borrowed connection
//! - `Register`, the scoped-connection API used by front-ends

pub mod db;
pub mod errors;
pub mod register;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use register::Register;
pub use repo::SqliteRepo;
