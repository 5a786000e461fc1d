//! Repository layer mapping register records to SQLite rows

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
