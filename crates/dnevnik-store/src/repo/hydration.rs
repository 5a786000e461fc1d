//! Hydration layer - maps database rows to register records
//!
//! Text columns are nullable in the schema; NULL reads back as an empty
//! string so a sparse row still produces a displayable record.

use dnevnik_core::model::{Student, Teacher};
use rusqlite::Row;

/// Columns expected by [`teacher_from_row`], in order
pub const TEACHER_COLUMNS: &str = "teacher_id, first_name, last_name, subject";

/// Columns expected by [`student_from_row`], in order
pub const STUDENT_COLUMNS: &str = "student_id, first_name, last_name, class";

fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

/// Build a Teacher from a row selected with [`TEACHER_COLUMNS`]
pub fn teacher_from_row(row: &Row<'_>) -> rusqlite::Result<Teacher> {
    Ok(Teacher::new(
        row.get(0)?,
        text(row, 1)?,
        text(row, 2)?,
        text(row, 3)?,
    ))
}

/// Build a Student from a row selected with [`STUDENT_COLUMNS`]
pub fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student::new(
        row.get(0)?,
        text(row, 1)?,
        text(row, 2)?,
        text(row, 3)?,
    ))
}
