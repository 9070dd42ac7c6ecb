//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crudmongo_core::item::Item;
use crudmongo_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Items are kept in insertion order, mirroring a collection's natural order.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given items.
    #[allow(dead_code)]
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items.into_iter().collect())),
        }
    }
}

fn has_id(item: &Item, id: &str) -> bool {
    item.id.as_deref() == Some(id)
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| has_id(item, id)).cloned())
    }

    async fn create_item(&self, mut item: Item) -> Result<Item> {
        let id = item
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        let mut items = self.items.write().await;
        if items.iter().any(|existing| has_id(existing, &id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id,
            });
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &str, item: Item) -> Result<()> {
        let mut items = self.items.write().await;
        if let Some(existing) = items.iter_mut().find(|existing| has_id(existing, id)) {
            *existing = Item {
                id: Some(id.to_string()),
                ..item
            };
        }
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        if let Some(index) = items.iter().position(|item| has_id(item, id)) {
            items.remove(index);
        }
        Ok(())
    }
}
