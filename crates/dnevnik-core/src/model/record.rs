use serde::{Deserialize, Serialize};

use super::person::Person;
use super::student::Student;
use super::teacher::Teacher;

/// Kind tag for a register record
///
/// The kind alone decides which table a record lives in and which column
/// holds its primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Teacher,
    Student,
}

impl RecordKind {
    /// All kinds in listing order (teachers before students)
    pub const ALL: [RecordKind; 2] = [RecordKind::Teacher, RecordKind::Student];

    /// Table holding rows of this kind
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Teacher => "teachers",
            RecordKind::Student => "students",
        }
    }

    /// Primary key column of [`RecordKind::table`]
    pub fn key_column(&self) -> &'static str {
        match self {
            RecordKind::Teacher => "teacher_id",
            RecordKind::Student => "student_id",
        }
    }

    /// Prefix used in display labels
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Teacher => "TEACHER",
            RecordKind::Student => "STUDENT",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Teacher => write!(f, "teacher"),
            RecordKind::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(RecordKind::Teacher),
            "student" => Ok(RecordKind::Student),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

/// A listed register record of either kind
///
/// Front-ends hold a mixed `Vec<Record>` and render each entry through
/// [`label`] without inspecting the variant themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Teacher(Teacher),
    Student(Student),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Teacher(_) => RecordKind::Teacher,
            Record::Student(_) => RecordKind::Student,
        }
    }

    pub fn person(&self) -> &Person {
        match self {
            Record::Teacher(teacher) => &teacher.person,
            Record::Student(student) => &student.person,
        }
    }

    /// Primary key within the table of [`Record::kind`]
    pub fn id(&self) -> i64 {
        self.person().id
    }

    pub fn label(&self) -> String {
        label(self)
    }
}

impl From<Teacher> for Record {
    fn from(teacher: Teacher) -> Self {
        Record::Teacher(teacher)
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Record::Student(student)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&label(self))
    }
}

/// Render the display label of a record
///
/// - Teacher: `[TEACHER] {first} {last} - {subject}`
/// - Student: `[STUDENT] {first} {last} ({class})`
pub fn label(record: &Record) -> String {
    let tag = record.kind().tag();
    match record {
        Record::Teacher(teacher) => format!(
            "[{}] {} - {}",
            tag,
            teacher.person.full_name(),
            teacher.subject
        ),
        Record::Student(student) => format!(
            "[{}] {} ({})",
            tag,
            student.person.full_name(),
            student.class_name
        ),
    }
}
