//! MongoDB storage backend implementation.
//!
//! [`MongoDbContext`] owns the lazily-built driver client and the `Items`
//! collection handle; [`MongoItemRepository`] maps each repository call onto
//! a single collection call.

mod context;
mod conversions;
mod error;
mod repository;

pub use context::MongoDbContext;
pub use repository::MongoItemRepository;
