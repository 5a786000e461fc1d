//! Register - the repository API consumed by front-ends
//!
//! Each operation opens its own connection to the database file, runs its
//! statements and drops the connection before returning, on success and on
//! every error path alike. No state is kept between calls.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for register operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! `SqliteRepo` below it uses only `tracing::debug!()`.
//!
//! ## Key assignment
//!
//! Student keys are read-max-then-insert, not database auto-increment. The
//! read and the insert are separate autocommit statements, so a second process
//! writing the same file can race and collide on a key (reported as
//! `QueryFailed`). Single-writer use is assumed.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::Result;
use crate::repo::SqliteRepo;
use dnevnik_core::model::{NewStudent, Record, Student};
use dnevnik_core::{egn, rules, ExError};
use dnevnik_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// School register backed by a single SQLite file
#[derive(Debug, Clone)]
pub struct Register {
    db_path: PathBuf,
}

impl Register {
    /// Register over an existing database file
    ///
    /// The file is not touched until the first operation.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create the database file and both tables, then return a register over it
    ///
    /// Safe to call on an existing register file; existing rows are kept.
    pub fn create(db_path: impl Into<PathBuf>) -> Result<Self> {
        let register = Self::new(db_path);
        db::create(&register.db_path)?;
        tracing::info!(path = %register.db_path.display(), "register database ready");
        Ok(register)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        db::open(&self.db_path)
    }

    /// List every record, teachers before students
    ///
    /// ## Errors
    ///
    /// - `StorageUnavailable`: the database file does not exist
    /// - `QueryFailed`: either SELECT failed
    pub fn list_all(&self) -> Result<Vec<Record>> {
        log_op_start!("list_all");
        let start = Instant::now();

        let records = self.list_all_impl().map_err(|e| {
            log_op_error!(
                "list_all",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "list_all",
            duration_ms = start.elapsed().as_millis() as u64,
            record_count = records.len()
        );

        Ok(records)
    }

    fn list_all_impl(&self) -> Result<Vec<Record>> {
        let conn = self.connect()?;
        SqliteRepo::list_all(&conn)
    }

    /// Key the next inserted student will receive
    ///
    /// ## Errors
    ///
    /// - `StorageUnavailable`: the database file does not exist
    /// - `QueryFailed`: the aggregate query failed, or the largest key is
    ///   already `i64::MAX`
    pub fn next_student_id(&self) -> Result<i64> {
        log_op_start!("next_student_id");
        let start = Instant::now();

        let next_id = self
            .connect()
            .and_then(|conn| SqliteRepo::next_student_id(&conn))
            .map_err(|e| {
                log_op_error!(
                    "next_student_id",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            "next_student_id",
            duration_ms = start.elapsed().as_millis() as u64,
            record_id = next_id
        );

        Ok(next_id)
    }

    /// Insert a student and return it with its assigned key
    ///
    /// ## Errors
    ///
    /// - `ValidationError`: `first_name` is blank; nothing is written
    /// - `StorageUnavailable`: the database file does not exist
    /// - `QueryFailed`: key lookup or insert failed
    pub fn insert_student(
        &self,
        first_name: &str,
        last_name: &str,
        class_name: &str,
    ) -> Result<Student> {
        log_op_start!("insert_student", record_kind = "student");
        let start = Instant::now();

        let student = self
            .insert_student_impl(NewStudent::new(first_name, last_name, class_name))
            .map_err(|e| {
                log_op_error!(
                    "insert_student",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            "insert_student",
            duration_ms = start.elapsed().as_millis() as u64,
            record_id = student.person.id
        );

        Ok(student)
    }

    fn insert_student_impl(&self, new_student: NewStudent) -> Result<Student> {
        rules::validate_new_student(&new_student).map_err(ExError::from)?;

        let conn = self.connect()?;
        let student_id = SqliteRepo::next_student_id(&conn)?;
        SqliteRepo::insert_student(&conn, student_id, &new_student, &egn::generate())?;

        Ok(new_student.into_student(student_id))
    }

    /// Delete the selected record from the table of its kind
    ///
    /// `None` (nothing selected) is a no-op. Returns the number of rows
    /// removed; an id that is no longer in the table removes 0 rows and is
    /// not an error.
    ///
    /// ## Errors
    ///
    /// - `StorageUnavailable`: the database file does not exist
    /// - `QueryFailed`: the DELETE failed
    pub fn delete_record(&self, record: Option<&Record>) -> Result<usize> {
        let Some(record) = record else {
            log_op_start!("delete_record", selected = false);
            log_op_end!("delete_record", duration_ms = 0u64, rows_affected = 0usize);
            return Ok(0);
        };

        let kind = record.kind();
        let id = record.id();
        log_op_start!("delete_record", record_kind = %kind, record_id = id);
        let start = Instant::now();

        let removed = self
            .connect()
            .and_then(|conn| SqliteRepo::delete(&conn, kind, id))
            .map_err(|e| {
                log_op_error!(
                    "delete_record",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    record_id = id
                );
                e
            })?;

        log_op_end!(
            "delete_record",
            duration_ms = start.elapsed().as_millis() as u64,
            record_id = id,
            rows_affected = removed
        );

        Ok(removed)
    }
}
