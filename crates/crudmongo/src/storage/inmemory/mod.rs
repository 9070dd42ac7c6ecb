//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`ItemRepository`]
//! that stores items in a `Vec` wrapped in `Arc<RwLock<_>>`. It doubles as
//! the test double for handler tests and as a database-free development
//! backend behind the `inmemory` feature.
//!
//! [`ItemRepository`]: crudmongo_core::storage::ItemRepository

mod repository;

pub use repository::InMemoryRepository;
