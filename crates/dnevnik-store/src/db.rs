//! Database connection management
//!
//! Every handle returned here is an owned `Connection`; dropping it closes the
//! underlying file.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, storage_unavailable, Result};
use crate::schema;
use dnevnik_core::ExError;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Fixed database filename, resolved against the application directory
pub const DB_FILE_NAME: &str = "dnevnik.db";

/// Open an existing database file
///
/// Never creates the file: a missing path is reported as
/// `StorageUnavailable`.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(storage_unavailable(path));
    }

    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| open_error(path, e))
}

// The file can vanish between the check above and the open
fn open_error(path: &Path, err: rusqlite::Error) -> ExError {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.code == rusqlite::ErrorCode::CannotOpen =>
        {
            storage_unavailable(path)
        }
        other => from_rusqlite(other),
    }
}

/// Create (or reopen) a database file and make sure both tables exist
pub fn create<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    schema::create_tables(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with both tables (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    schema::create_tables(&conn)?;
    Ok(conn)
}
