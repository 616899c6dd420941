use serde::{Deserialize, Serialize};

/// A single stored entry.
///
/// On disk the contact is written under the `email` key, matching files
/// produced by earlier versions of the tool. `contact` is accepted when
/// reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "email", alias = "contact", default)]
    pub contact: String,
    #[serde(default)]
    pub age: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, contact: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            contact: contact.into(),
            age,
        }
    }
}
