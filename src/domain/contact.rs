use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // For backward compatibility with contacts without id.
    pub id: Uuid,

    pub name: String,
    pub number: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, number: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name,
            number,
            created_at: Utc::now(),
        }
    }

    /// Whether this contact is visible under `query`.
    ///
    /// The query is trimmed, then matched case-insensitively against the
    /// name and as a raw substring against the number. An empty query
    /// matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();

        self.name.to_lowercase().contains(&query.to_lowercase()) || self.number.contains(query)
    }

    /// Sort key for the visible listing.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

// Identity is name + number. Ids are regenerated for records persisted
// before ids existed, so they take no part in equality.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.number == other.number
    }
}

impl Eq for Contact {}
