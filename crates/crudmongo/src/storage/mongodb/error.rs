//! MongoDB error mapping.
//!
//! Maps driver errors to `RepositoryError` from `crudmongo_core::storage`.

use mongodb::error::{Error, ErrorKind, WriteFailure};

use crudmongo_core::storage::RepositoryError;

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Map a driver error raised while building the client.
pub fn map_connection_error(err: Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

/// Map a driver error raised by a collection call.
pub fn map_driver_error(err: Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::InvalidArgument { .. }
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Io(_) => RepositoryError::ConnectionFailed(err.to_string()),
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Map an insert error, turning a duplicate `_id` into `AlreadyExists`.
pub fn map_insert_error(err: Error, entity_type: &'static str, id: &str) -> RepositoryError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
        if write_error.code == DUPLICATE_KEY {
            return RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            };
        }
    }

    map_driver_error(err)
}
