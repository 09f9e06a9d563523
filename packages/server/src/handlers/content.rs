use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::content::*;
use crate::state::AppState;

/// Base path the item routes are mounted under, used for `Location` headers.
pub const ITEMS_PATH: &str = "/api/v1/items";

#[utoipa::path(
    get,
    path = "/",
    tag = "Content",
    operation_id = "listItems",
    summary = "List all content items",
    description = "Returns every stored content item in ascending id order. No pagination.",
    responses(
        (status = 200, description = "All content items", body = Vec<ContentItemResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentItemResponse>>, AppError> {
    let items = state.store.list_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Content",
    operation_id = "getItem",
    summary = "Get a content item by ID",
    params(("id" = i32, Path, description = "Content item ID")),
    responses(
        (status = 200, description = "Content item", body = ContentItemResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Content item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ContentItemResponse>, AppError> {
    let item = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Content item not found".into()))?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Content",
    operation_id = "createItem",
    summary = "Create a content item",
    description = "Parses `payload` as JSON and stores it. Both timestamps are set to the current time. The `Location` header points at the new item.",
    request_body = ContentItemRequest,
    responses(
        (status = 201, description = "Content item created", body = ContentItemResponse),
        (status = 400, description = "Payload is not valid JSON (INVALID_PAYLOAD) or malformed body (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, body))]
pub async fn create_item(
    State(state): State<AppState>,
    AppJson(body): AppJson<ContentItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body.payload)?;
    let item = state.store.insert(payload).await?;

    let location = format!("{ITEMS_PATH}/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ContentItemResponse::from(item)),
    ))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Content",
    operation_id = "updateItem",
    summary = "Replace the payload of a content item",
    description = "Replaces the payload wholesale and refreshes `updated_at`. A missing item is reported before the payload is validated.",
    params(("id" = i32, Path, description = "Content item ID")),
    request_body = ContentItemRequest,
    responses(
        (status = 204, description = "Content item updated"),
        (status = 400, description = "Payload is not valid JSON (INVALID_PAYLOAD) or malformed body (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Content item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, body), fields(id))]
pub async fn update_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<ContentItemRequest>,
) -> Result<StatusCode, AppError> {
    if state.store.get(id).await?.is_none() {
        return Err(AppError::NotFound("Content item not found".into()));
    }

    let payload = parse_payload(&body.payload)?;
    state.store.update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Content",
    operation_id = "deleteItem",
    summary = "Delete a content item",
    description = "Permanently removes the item.",
    params(("id" = i32, Path, description = "Content item ID")),
    responses(
        (status = 204, description = "Content item deleted"),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Content item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
