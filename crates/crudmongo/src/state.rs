//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The repository is a trait object chosen at startup, so
//! handlers never know which backend they talk to.

use std::sync::Arc;

use crudmongo_core::storage::ItemRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler. It holds no mutable state of its
/// own; everything lives behind the repository.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Creates the AppState for the storage backend selected at compile time.
    ///
    /// With `mongodb` this builds an unconnected context from `config`; the
    /// first request opens the connection.
    #[cfg(feature = "mongodb")]
    pub fn from_config(config: &Config) -> Self {
        use crate::storage::MongoItemRepository;

        tracing::info!(database = %config.database_name, "Using MongoDB storage");

        Self::new(Arc::new(MongoItemRepository::connect(
            &config.connection_string,
            &config.database_name,
        )))
    }

    /// Creates the AppState for the storage backend selected at compile time.
    #[cfg(all(feature = "inmemory", not(feature = "mongodb")))]
    pub fn from_config(_config: &Config) -> Self {
        tracing::info!("Using in-memory storage");

        Self::default()
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
