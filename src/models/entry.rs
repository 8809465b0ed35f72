use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// One child of a listed directory, as reported to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    #[serde(rename = "bytes")]
    pub size_bytes: u64,
    pub created_at: f64,
    pub folder_path: String,
    pub notes: String,
}

/// Outcome of a listing call. `Rejected` is distinct from both an empty
/// listing and a fatal error; callers must check for it before treating
/// the result as a list.
#[derive(Debug, Clone)]
pub enum Listing {
    Rejected,
    Entries(Vec<Entry>),
}

impl Listing {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Listing::Rejected)
    }

    pub fn into_entries(self) -> Option<Vec<Entry>> {
        match self {
            Listing::Rejected => None,
            Listing::Entries(entries) => Some(entries),
        }
    }
}

impl Serialize for Listing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Listing::Rejected => serializer.serialize_none(),
            Listing::Entries(entries) => entries.serialize(serializer),
        }
    }
}
