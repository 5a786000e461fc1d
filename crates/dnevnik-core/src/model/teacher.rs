use serde::{Deserialize, Serialize};

use super::person::Person;

/// A row of the `teachers` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(flatten)]
    pub person: Person,

    /// Subject taught, free text
    pub subject: String,
}

impl Teacher {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, first_name, last_name),
            subject: subject.into(),
        }
    }
}
