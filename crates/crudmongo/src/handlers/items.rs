//! Item CRUD handlers.
//!
//! Each handler makes exactly one repository call and maps its outcome to a
//! status code. There is no validation beyond JSON deserialization.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crudmongo_core::item::Item;

use crate::{handlers::AppError, state::AppState};

/// List all items (GET /api/items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.list_items().await?;
    Ok(Json(items))
}

/// Get a single item by ID (GET /api/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.get_item(&id).await?;

    Ok(match item {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Create a new item (POST /api/items).
///
/// Responds with 201 and a `Location` header pointing at the new item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<Item>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.create_item(payload).await?;
    let id = item.id.as_deref().unwrap_or_default();

    tracing::info!(item_id = %id, name = %item.name, "Created new item");

    let location = item_location(id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// Path of a single item, with the id encoded as one path segment.
///
/// The result only contains unreserved ASCII and `%XX` escapes, so it is
/// always a valid header value.
fn item_location(id: &str) -> String {
    format!("/api/items/{}", urlencoding::encode(id))
}

/// Replace an item by ID (PUT /api/items/{id}).
///
/// Responds with 204 whether or not an item was stored under `id`.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Item>,
) -> Result<StatusCode, AppError> {
    state.item_repo.update_item(&id, payload).await?;

    tracing::info!(item_id = %id, "Updated item");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item by ID (DELETE /api/items/{id}).
///
/// Responds with 204 whether or not an item was stored under `id`.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.item_repo.delete_item(&id).await?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
