use async_trait::async_trait;

use crate::item::Item;

use super::Result;

/// Repository for item operations.
///
/// Every method maps onto exactly one document-store call. Update and delete
/// do not check for existence: touching zero documents is not an error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets every item, in whatever order the store returns them.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Inserts an item and returns it with its id filled in.
    async fn create_item(&self, item: Item) -> Result<Item>;

    /// Replaces the whole item stored under `id`.
    async fn update_item(&self, id: &str, item: Item) -> Result<()>;

    /// Deletes the item stored under `id`.
    async fn delete_item(&self, id: &str) -> Result<()>;
}
