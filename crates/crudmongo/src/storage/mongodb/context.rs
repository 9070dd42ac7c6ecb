//! Lazily-connected handle to the `Items` collection.

use mongodb::{options::ClientOptions, Client, Collection};
use tokio::sync::OnceCell;

use crudmongo_core::storage::{RepositoryError, Result};

use super::conversions::ItemDocument;
use super::error::map_connection_error;

/// Name of the collection holding item documents.
pub const ITEMS_COLLECTION: &str = "Items";

/// Connection settings plus the collection handle built from them.
///
/// Construction performs no I/O and cannot fail. The connection string is
/// parsed and the client created on the first call to [`items`], so a bad
/// string or unreachable server is reported by the first repository call.
///
/// [`items`]: MongoDbContext::items
pub struct MongoDbContext {
    connection_string: String,
    database_name: String,
    items: OnceCell<Collection<ItemDocument>>,
}

impl MongoDbContext {
    /// Creates a context for the given connection string and database name.
    pub fn new(connection_string: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            database_name: database_name.into(),
            items: OnceCell::new(),
        }
    }

    /// Returns the `Items` collection, connecting on first use.
    ///
    /// A failed attempt leaves the cell empty, so the next call tries again.
    pub async fn items(&self) -> Result<&Collection<ItemDocument>> {
        self.items
            .get_or_try_init(|| async {
                let options = ClientOptions::parse(self.connection_string.as_str())
                    .await
                    .map_err(map_connection_error)?;
                let client = Client::with_options(options).map_err(map_connection_error)?;

                tracing::debug!(
                    database = %self.database_name,
                    collection = ITEMS_COLLECTION,
                    "Opened MongoDB collection"
                );

                Ok::<_, RepositoryError>(
                    client
                        .database(&self.database_name)
                        .collection::<ItemDocument>(ITEMS_COLLECTION),
                )
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_does_not_validate_connection_string() {
        let context = MongoDbContext::new("not a connection string", "testdb");
        assert!(context.items.get().is_none());
    }

    #[tokio::test]
    async fn test_malformed_connection_string_fails_on_first_use() {
        let context = MongoDbContext::new("not a connection string", "testdb");

        let result = context.items().await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_items_handle_is_built_without_contacting_server() {
        // The driver connects lazily, so a well-formed string is enough.
        let context = MongoDbContext::new("mongodb://localhost:27017", "testdb");

        let collection = context.items().await.unwrap();

        assert_eq!(collection.name(), ITEMS_COLLECTION);
        assert_eq!(collection.namespace().db, "testdb");
    }
}
