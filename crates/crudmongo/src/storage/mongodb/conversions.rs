//! Item document conversions.
//!
//! Pure functions for converting between the stored document shape and the
//! domain `Item`. These are testable in isolation without MongoDB access.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crudmongo_core::item::Item;

/// Stored shape of an item: the id is the document key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Generates a fresh document key for items created without an id.
pub fn generate_id() -> String {
    ObjectId::new().to_hex()
}

/// Convert an Item to a document stored under `id`.
pub fn item_to_document(id: impl Into<String>, item: Item) -> ItemDocument {
    ItemDocument {
        id: id.into(),
        name: item.name,
        description: item.description,
    }
}

/// Convert a document back to an Item.
pub fn document_to_item(document: ItemDocument) -> Item {
    Item {
        id: Some(document.id),
        name: document.name,
        description: document.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_item_to_document_uses_given_id() {
        let item = Item::new("UpdatedItem", "UpdatedDescription").with_id("ignored");

        let document = item_to_document("1", item);

        assert_eq!(document.id, "1");
        assert_eq!(document.name, "UpdatedItem");
        assert_eq!(document.description, "UpdatedDescription");
    }

    #[test]
    fn test_document_to_item() {
        let document = ItemDocument {
            id: "1".to_string(),
            name: "Item1".to_string(),
            description: "Description1".to_string(),
        };

        let item = document_to_item(document);

        assert_eq!(item, Item::new("Item1", "Description1").with_id("1"));
    }

    #[test]
    fn test_document_bson_shape() {
        let document = item_to_document("3", Item::new("NewItem", "NewDescription"));

        let bson = bson::to_document(&document).unwrap();

        assert_eq!(
            bson,
            doc! { "_id": "3", "Name": "NewItem", "Description": "NewDescription" }
        );
    }

    #[test]
    fn test_document_from_bson() {
        let bson = doc! { "_id": "2", "Name": "Item2", "Description": "Description2" };

        let document: ItemDocument = bson::from_document(bson).unwrap();

        assert_eq!(
            document_to_item(document),
            Item::new("Item2", "Description2").with_id("2")
        );
    }

    #[test]
    fn test_generate_id_is_object_id_hex() {
        let id = generate_id();

        assert_eq!(id.len(), 24);
        assert!(ObjectId::parse_str(&id).is_ok());
        assert_ne!(id, generate_id());
    }
}
