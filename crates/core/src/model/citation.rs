use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DataAccessError;

/// A harvested citation count for one item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationRecord {
    pub id: i32,
    pub item_id: i32,
    pub cited_by: u32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub retrieved_at: Option<DateTime<Utc>>,
}

/// Generic persistence contract for a single entity type.
///
/// Pure signatures; backing engines live outside this crate.
pub trait EntityStore<T, K> {
    fn find(&self, id: K) -> Result<Option<T>, DataAccessError>;

    fn save(&self, entity: T) -> Result<(), DataAccessError>;

    fn delete(&self, id: K) -> Result<(), DataAccessError>;
}

/// Citation lookups keyed by the owning item.
pub trait CitationStore: EntityStore<CitationRecord, i32> {
    /// The unique citation record attached to an item, if one was harvested.
    fn unique_by_item(&self, item_id: i32) -> Result<Option<CitationRecord>, DataAccessError>;
}
