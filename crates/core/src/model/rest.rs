// Transfer objects for the HTTP surface. Shape only, no behavior; the uuid
// stays internal and never serializes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::object::Item;

/// One metadata entry as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataEntryRest {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Wire representation of a repository object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRest {
    #[serde(skip)]
    pub uuid: Uuid,
    pub name: String,
    pub handle: String,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub metadata: Vec<MetadataEntryRest>,
}

impl From<&Item> for ObjectRest {
    fn from(item: &Item) -> Self {
        Self {
            uuid: item.uuid,
            name: item.name.clone(),
            handle: item.handle.clone(),
            object_type: item.type_label.clone(),
            metadata: item
                .metadata
                .iter()
                .map(|value| MetadataEntryRest {
                    key: value.field.clone(),
                    value: value.value.clone(),
                    language: value.language.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::object::MetadataValue;

    fn sample_item() -> Item {
        Item {
            uuid: Uuid::now_v7(),
            handle: "123456789/7".to_string(),
            name: "Sample item".to_string(),
            type_label: "Publication".to_string(),
            collections: vec![],
            metadata: vec![MetadataValue {
                field: "dc.title".to_string(),
                value: "Sample item".to_string(),
                language: Some("en".to_string()),
            }],
        }
    }

    #[test]
    fn serialization_hides_the_uuid() {
        let rest = ObjectRest::from(&sample_item());
        let json = serde_json::to_value(&rest).unwrap();

        assert!(json.get("uuid").is_none());
        assert_eq!(json["handle"], "123456789/7");
        assert_eq!(json["type"], "Publication");
        assert_eq!(json["metadata"][0]["key"], "dc.title");
    }

    #[test]
    fn deserialization_defaults_the_uuid() {
        let rest: ObjectRest = serde_json::from_str(
            r#"{"name": "Sample", "handle": "123456789/7", "type": "Publication"}"#,
        )
        .unwrap();

        assert_eq!(rest.uuid, Uuid::nil());
        assert!(rest.metadata.is_empty());
    }
}
