pub mod person;
pub mod record;
pub mod student;
pub mod teacher;

pub use person::Person;
pub use record::{label, Record, RecordKind};
pub use student::{NewStudent, Student};
pub use teacher::Teacher;
