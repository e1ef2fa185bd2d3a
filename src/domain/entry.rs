use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

/// One row of the form table
///
/// `number` is kept as free text; it is published exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub number: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Ordered list of entries in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList(Vec<Entry>);

impl EntryList {
    /// Creates a list holding `rows` blank entries
    pub fn with_blank_rows(rows: usize) -> Self {
        Self(vec![Entry::default(); rows])
    }

    /// Serializes the list into event content: a JSON array of `{name, number}` objects
    pub fn to_content(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Parses event content back into an entry list
    pub fn from_content(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl From<Vec<Entry>> for EntryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}
