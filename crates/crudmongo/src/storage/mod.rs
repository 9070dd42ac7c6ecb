//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`ItemRepository`]
//! trait defined in `crudmongo_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `mongodb` (default): MongoDB storage backend using the official `mongodb` driver
//! - `inmemory`: process-local storage, useful for development without a database
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with MongoDB (default):
//! ```bash
//! cargo build -p crudmongo
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p crudmongo --no-default-features --features inmemory
//! ```
//!
//! [`ItemRepository`]: crudmongo_core::storage::ItemRepository

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "mongodb", feature = "inmemory"))]
compile_error!(
    "Features 'mongodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "mongodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'mongodb' or 'inmemory' feature. \
    Example: cargo build -p crudmongo --features mongodb"
);

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "mongodb")]
pub use self::mongodb::MongoItemRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
