//! MongoDB repository implementation.
//!
//! Implements `ItemRepository` from `crudmongo_core::storage` with one
//! collection call per operation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crudmongo_core::item::Item;
use crudmongo_core::storage::{ItemRepository, Result};

use super::context::MongoDbContext;
use super::conversions::{document_to_item, generate_id, item_to_document};
use super::error::{map_driver_error, map_insert_error};

/// MongoDB-based repository implementation.
pub struct MongoItemRepository {
    context: MongoDbContext,
}

impl MongoItemRepository {
    /// Creates a new repository over the given context.
    pub fn new(context: MongoDbContext) -> Self {
        Self { context }
    }

    /// Creates a new repository from a connection string and database name.
    pub fn connect(connection_string: &str, database_name: &str) -> Self {
        Self::new(MongoDbContext::new(connection_string, database_name))
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let documents: Vec<_> = self
            .context
            .items()
            .await?
            .find(doc! {})
            .await
            .map_err(map_driver_error)?
            .try_collect()
            .await
            .map_err(map_driver_error)?;

        tracing::debug!(count = documents.len(), "Listed items");

        Ok(documents.into_iter().map(document_to_item).collect())
    }

    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let document = self
            .context
            .items()
            .await?
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_driver_error)?;

        Ok(document.map(document_to_item))
    }

    async fn create_item(&self, item: Item) -> Result<Item> {
        let id = item.id.clone().unwrap_or_else(generate_id);
        let document = item_to_document(id.as_str(), item);

        self.context
            .items()
            .await?
            .insert_one(&document)
            .await
            .map_err(|e| map_insert_error(e, "Item", &id))?;

        tracing::debug!(item_id = %id, "Inserted item");

        Ok(document_to_item(document))
    }

    async fn update_item(&self, id: &str, item: Item) -> Result<()> {
        let document = item_to_document(id, item);

        let result = self
            .context
            .items()
            .await?
            .replace_one(doc! { "_id": id }, &document)
            .await
            .map_err(map_driver_error)?;

        tracing::debug!(
            item_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Replaced item"
        );

        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let result = self
            .context
            .items()
            .await?
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_driver_error)?;

        tracing::debug!(item_id = %id, deleted = result.deleted_count, "Deleted item");

        Ok(())
    }
}
