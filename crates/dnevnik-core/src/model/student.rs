use serde::{Deserialize, Serialize};

use super::person::Person;

/// A row of the `students` table, projected for display
///
/// The stored `egn` column is not part of the projection; it is written on
/// insert and never read back for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,

    /// Class the student belongs to (e.g. "6A"), stored in the `class` column
    pub class_name: String,
}

impl Student {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, first_name, last_name),
            class_name: class_name.into(),
        }
    }
}

/// Form input for a student that has not been persisted yet
///
/// Carries no id: the store assigns one at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub class_name: String,
}

impl NewStudent {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            class_name: class_name.into(),
        }
    }

    /// Attach the store-assigned id, producing the listed projection
    pub fn into_student(self, id: i64) -> Student {
        Student::new(id, self.first_name, self.last_name, self.class_name)
    }
}
