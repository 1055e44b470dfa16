use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DataAccessError;

/// Object-type code for items, used by the ignored-fields lookup.
pub const TYPE_ITEM: i32 = 2;
/// Object-type code for collections.
pub const TYPE_COLLECTION: i32 = 3;
/// Object-type code for communities.
pub const TYPE_COMMUNITY: i32 = 4;

/// A single metadata value attached to a repository object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataValue {
    pub field: String,
    pub value: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// A collection that owns items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    #[serde(default = "Uuid::nil")]
    pub uuid: Uuid,
    pub handle: String,
    #[serde(default)]
    pub name: String,
}

/// A published (or draft) item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(default = "Uuid::nil")]
    pub uuid: Uuid,
    pub handle: String,
    #[serde(default)]
    pub name: String,
    pub type_label: String,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub metadata: Vec<MetadataValue>,
}

/// An item sitting in a submitter's workspace. Exactly one collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceItem {
    pub collection: Collection,
    pub item: Item,
}

/// An item under workflow review. Exactly one collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowItem {
    pub collection: Collection,
    pub item: Item,
}

/// Anything addressable by a persistent handle.
pub trait BrowsableObject {
    fn handle(&self) -> &str;
}

/// A resolution target that carries a type label and owning collections.
///
/// `owning_collections` may hit persistence in a backed implementation;
/// faults surface as [`DataAccessError`] and the resolver propagates them
/// unchanged.
pub trait DiscoverableItem: BrowsableObject {
    fn type_label(&self) -> &str;

    fn owning_collections(&self) -> Result<Vec<Collection>, DataAccessError>;
}

/// An in-progress submission: one collection, one draft item.
pub trait InProgressSubmission {
    fn collection(&self) -> Result<Collection, DataAccessError>;

    fn item(&self) -> Result<Item, DataAccessError>;
}

impl BrowsableObject for Collection {
    fn handle(&self) -> &str {
        &self.handle
    }
}

impl BrowsableObject for Item {
    fn handle(&self) -> &str {
        &self.handle
    }
}

impl DiscoverableItem for Item {
    fn type_label(&self) -> &str {
        &self.type_label
    }

    fn owning_collections(&self) -> Result<Vec<Collection>, DataAccessError> {
        Ok(self.collections.clone())
    }
}

impl InProgressSubmission for WorkspaceItem {
    fn collection(&self) -> Result<Collection, DataAccessError> {
        Ok(self.collection.clone())
    }

    fn item(&self) -> Result<Item, DataAccessError> {
        Ok(self.item.clone())
    }
}

impl InProgressSubmission for WorkflowItem {
    fn collection(&self) -> Result<Collection, DataAccessError> {
        Ok(self.collection.clone())
    }

    fn item(&self) -> Result<Item, DataAccessError> {
        Ok(self.item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_exposes_its_collections() {
        let item = Item {
            uuid: Uuid::nil(),
            handle: "123456789/7".to_string(),
            name: "Sample".to_string(),
            type_label: "Publication".to_string(),
            collections: vec![Collection {
                uuid: Uuid::nil(),
                handle: "123456789/2".to_string(),
                name: "Articles".to_string(),
            }],
            metadata: vec![],
        };

        let collections = item.owning_collections().unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].handle, "123456789/2");
    }

    #[test]
    fn collection_deserializes_without_uuid() {
        let collection: Collection =
            serde_json::from_str(r#"{"handle": "123456789/2", "name": "Articles"}"#).unwrap();
        assert_eq!(collection.uuid, Uuid::nil());
        assert_eq!(collection.handle, "123456789/2");
    }
}
