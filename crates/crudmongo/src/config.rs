use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (default: "mongodb://localhost:27017")
    /// Note: Only used when the `mongodb` feature is enabled.
    #[allow(dead_code)]
    pub connection_string: String,
    /// Database that holds the `Items` collection (default: "crudmongo")
    #[allow(dead_code)]
    pub database_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONGODB_CONNECTION_STRING` - MongoDB connection string (default: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` - Database name (default: "crudmongo")
    ///
    /// The connection string is not validated here; a malformed value surfaces
    /// on the first storage call.
    pub fn from_env() -> Self {
        Self {
            connection_string: env::var("MONGODB_CONNECTION_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "crudmongo".to_string()),
        }
    }
}
