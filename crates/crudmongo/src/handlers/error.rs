use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error.
///
/// Storage failures are not told apart at the HTTP layer: every error becomes
/// a plain 500. The underlying cause is only logged.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudmongo_core::storage::RepositoryError;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_repository_error_maps_to_500() {
        let error: AppError = RepositoryError::AlreadyExists {
            entity_type: "Item",
            id: "1".to_string(),
        }
        .into();

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
