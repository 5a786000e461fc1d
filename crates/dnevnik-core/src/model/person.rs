use serde::{Deserialize, Serialize};

/// Fields shared by every register record
///
/// The `id` is the row's primary key within its own table. It is assigned by
/// the store when the row is inserted and is never chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Primary key, unique within the record's table
    pub id: i64,

    pub first_name: String,

    pub last_name: String,
}

impl Person {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "{first_name} {last_name}"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
