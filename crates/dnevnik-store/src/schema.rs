//! Table definitions for the register database
//!
//! Bootstrap only: tables are created if absent and never altered.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS teachers (
        teacher_id INTEGER PRIMARY KEY,
        first_name TEXT,
        last_name TEXT,
        subject TEXT
    );
    CREATE TABLE IF NOT EXISTS students (
        student_id INTEGER PRIMARY KEY,
        first_name TEXT,
        last_name TEXT,
        class TEXT,
        egn TEXT
    );
";

/// Create the `teachers` and `students` tables if they do not exist
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TABLES).map_err(from_rusqlite)
}
