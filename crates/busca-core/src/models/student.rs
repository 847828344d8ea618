//! Student model

use serde::{Deserialize, Serialize};

/// A student record as exchanged with the search endpoint
///
/// The wire format uses the Portuguese field names `nome` and `idade`.
/// Any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Age in years
    #[serde(rename = "idade")]
    pub age: u32,
}

impl Student {
    /// Create a new student record
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Case-insensitive substring match against the student's name
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Students matching a query, in the order the server returned them
pub type SearchResult = Vec<Student>;
