use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields a record must carry with non-empty values to be stored.
pub const ESSENTIAL_FIELDS: [&str; 4] = ["server", "server_port", "password", "method"];

pub fn is_essential(field: &str) -> bool {
    ESSENTIAL_FIELDS.contains(&field)
}

/// One scraped proxy entry, keyed by `server`.
///
/// The four essential fields are typed; anything else a page definition
/// declares rides along in `extra`, in field-list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub server: String,
    pub server_port: u16,
    pub password: String,
    pub method: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Merge key: records are unique by server address.
    pub fn key(&self) -> &str {
        &self.server
    }
}

/// The persisted store document: a single `configs` array of records,
/// ordered by first appearance and unique by server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub configs: Vec<Record>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
