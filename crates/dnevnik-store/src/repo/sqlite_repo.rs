//! SQLite repository implementation
//!
//! Statement-level access to the `teachers` and `students` tables over a
//! borrowed connection. Every value coming from user input is bound as a
//! parameter; only table and column names from [`RecordKind`] are spliced
//! into SQL text.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::{
    student_from_row, teacher_from_row, STUDENT_COLUMNS, TEACHER_COLUMNS,
};
use dnevnik_core::model::{NewStudent, Record, RecordKind, Student, Teacher};
use dnevnik_core::{ExError, ExErrorKind};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for teachers and students
pub struct SqliteRepo;

impl SqliteRepo {
    /// All rows of `teachers`, in storage order
    pub fn list_teachers(conn: &Connection) -> Result<Vec<Teacher>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM teachers", TEACHER_COLUMNS))
            .map_err(from_rusqlite)?;

        let teachers = stmt
            .query_map([], teacher_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(teachers)
    }

    /// All rows of `students`, in storage order
    pub fn list_students(conn: &Connection) -> Result<Vec<Student>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM students", STUDENT_COLUMNS))
            .map_err(from_rusqlite)?;

        let students = stmt
            .query_map([], student_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(students)
    }

    /// Rows of the table of `kind`, as records
    pub fn list_kind(conn: &Connection, kind: RecordKind) -> Result<Vec<Record>> {
        Ok(match kind {
            RecordKind::Teacher => Self::list_teachers(conn)?
                .into_iter()
                .map(Record::Teacher)
                .collect(),
            RecordKind::Student => Self::list_students(conn)?
                .into_iter()
                .map(Record::Student)
                .collect(),
        })
    }

    /// Every record, grouped in [`RecordKind::ALL`] order (teachers first)
    ///
    /// Order within each group is whatever SQLite returns. All queries
    /// complete before anything is returned, so a failure yields no partial
    /// list.
    pub fn list_all(conn: &Connection) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for kind in RecordKind::ALL {
            let group = Self::list_kind(conn, kind)?;
            tracing::debug!(table = kind.table(), rows = group.len(), "loaded records");
            records.extend(group);
        }
        Ok(records)
    }

    /// Next key for `students`: `MAX(student_id) + 1`, or 1 when empty
    ///
    /// Not atomic with the insert that follows. Two writers on the same file
    /// can read the same maximum. A maximum of `i64::MAX` leaves no key to
    /// hand out and is reported as `QueryFailed`.
    pub fn next_student_id(conn: &Connection) -> Result<i64> {
        let max: Option<i64> = conn
            .query_row("SELECT MAX(student_id) FROM students", [], |row| row.get(0))
            .map_err(from_rusqlite)?;

        match max {
            None => Ok(1),
            Some(m) => m.checked_add(1).ok_or_else(|| {
                ExError::new(ExErrorKind::QueryFailed)
                    .with_op("next_student_id")
                    .with_message(format!("student_id {} is the largest possible key", m))
            }),
        }
    }

    /// Insert one student row with an explicit key and egn
    pub fn insert_student(
        conn: &Connection,
        student_id: i64,
        student: &NewStudent,
        egn: &str,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO students (student_id, first_name, last_name, class, egn)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                student_id,
                student.first_name,
                student.last_name,
                student.class_name,
                egn,
            ],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(student_id, egn, "inserted student row");
        Ok(())
    }

    /// Delete the row keyed on `id` from the table of `kind`
    ///
    /// Returns the number of rows removed; 0 when the id is absent.
    pub fn delete(conn: &Connection, kind: RecordKind, id: i64) -> Result<usize> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            kind.table(),
            kind.key_column()
        );
        let removed = conn.execute(&sql, [id]).map_err(from_rusqlite)?;

        tracing::debug!(table = kind.table(), id, removed, "deleted rows");
        Ok(removed)
    }

    /// Row count of the table of `kind`
    pub fn count(conn: &Connection, kind: RecordKind) -> Result<i64> {
        conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table()),
            [],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Stored egn of a student, if the row exists
    pub fn student_egn(conn: &Connection, student_id: i64) -> Result<Option<String>> {
        let egn: Option<Option<String>> = conn
            .query_row(
                "SELECT egn FROM students WHERE student_id = ?1",
                [student_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        Ok(egn.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_next_student_id_empty_table() {
        let conn = db::open_in_memory().unwrap();
        assert_eq!(SqliteRepo::next_student_id(&conn).unwrap(), 1);
    }

    #[test]
    fn test_next_student_id_follows_max_not_count() {
        let conn = db::open_in_memory().unwrap();
        let s = NewStudent::new("Ivan", "Petrov", "6A");
        SqliteRepo::insert_student(&conn, 3, &s, "0000000000").unwrap();
        SqliteRepo::insert_student(&conn, 10, &s, "0000000000").unwrap();

        assert_eq!(SqliteRepo::next_student_id(&conn).unwrap(), 11);
    }

    #[test]
    fn test_delete_targets_kind_table() {
        let conn = db::open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO teachers VALUES (5, 'Ana', 'Ivanova', 'Math')",
            [],
        )
        .unwrap();
        SqliteRepo::insert_student(&conn, 5, &NewStudent::new("Ivan", "Petrov", "6A"), "1")
            .unwrap();

        let removed = SqliteRepo::delete(&conn, RecordKind::Teacher, 5).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(SqliteRepo::count(&conn, RecordKind::Teacher).unwrap(), 0);
        assert_eq!(SqliteRepo::count(&conn, RecordKind::Student).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_key_is_query_failed() {
        let conn = db::open_in_memory().unwrap();
        let s = NewStudent::new("Ivan", "Petrov", "6A");
        SqliteRepo::insert_student(&conn, 1, &s, "1").unwrap();

        let err = SqliteRepo::insert_student(&conn, 1, &s, "1").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::QueryFailed);
        assert!(err.message().contains("UNIQUE"));
    }

    #[test]
    fn test_student_egn_lookup() {
        let conn = db::open_in_memory().unwrap();
        SqliteRepo::insert_student(&conn, 2, &NewStudent::new("A", "B", "C"), "1234567890")
            .unwrap();

        assert_eq!(
            SqliteRepo::student_egn(&conn, 2).unwrap().as_deref(),
            Some("1234567890")
        );
        assert_eq!(SqliteRepo::student_egn(&conn, 99).unwrap(), None);
    }

    #[test]
    fn test_next_student_id_at_key_ceiling_is_query_failed() {
        let conn = db::open_in_memory().unwrap();
        SqliteRepo::insert_student(&conn, i64::MAX, &NewStudent::new("A", "B", "C"), "1")
            .unwrap();

        let err = SqliteRepo::next_student_id(&conn).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::QueryFailed);
        assert!(err.message().contains("9223372036854775807"));
    }

    #[test]
    fn test_insert_at_key_ceiling_is_query_failed_without_write() {
        let dir = tempfile::tempdir().unwrap();
        let register = crate::Register::create(dir.path().join(db::DB_FILE_NAME)).unwrap();
        {
            let conn = db::open(register.db_path()).unwrap();
            conn.execute(
                "INSERT INTO students VALUES (9223372036854775807, 'A', 'B', 'C', '1')",
                [],
            )
            .unwrap();
        }

        assert_eq!(
            register.next_student_id().unwrap_err().kind(),
            ExErrorKind::QueryFailed
        );
        assert_eq!(
            register.insert_student("X", "Y", "Z").unwrap_err().kind(),
            ExErrorKind::QueryFailed
        );

        let conn = db::open(register.db_path()).unwrap();
        assert_eq!(SqliteRepo::count(&conn, RecordKind::Student).unwrap(), 1);
    }

    #[test]
    fn test_list_all_groups_follow_kind_order() {
        let conn = db::open_in_memory().unwrap();
        SqliteRepo::insert_student(&conn, 1, &NewStudent::new("Ivan", "Petrov", "6A"), "1")
            .unwrap();
        conn.execute(
            "INSERT INTO teachers VALUES (1, 'Ana', 'Ivanova', 'Math')",
            [],
        )
        .unwrap();

        let kinds: Vec<RecordKind> = SqliteRepo::list_all(&conn)
            .unwrap()
            .iter()
            .map(Record::kind)
            .collect();
        assert_eq!(kinds, RecordKind::ALL.to_vec());
    }
}
