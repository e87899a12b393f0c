use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct KeywordTag {
    pub id: u64,
    pub name: String,
}

impl KeywordTag {
    /// Case-insensitive exact name match. Full Unicode folding, so Danish
    /// letters compare too ("Økologi" matches "økologi").
    pub fn matches_name(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}
