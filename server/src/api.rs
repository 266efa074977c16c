//! Request handlers for `/api/todo`.
//!
//! Bodies are taken as raw bytes and decoded here rather than through the
//! `Json` extractor, so that a missing body, a JSON `null` and a malformed
//! document all answer 400 instead of axum's 415/422 rejections.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::model::{NewItem, TodoItem};
use crate::store::ItemStore;

pub type SharedStore = Arc<dyn ItemStore>;

pub const ITEMS_PATH: &str = "/api/todo";

pub fn item_location(id: i64) -> String {
    format!("{ITEMS_PATH}/{id}")
}

/// The `{id}` path segment. A non-integer id is a 400 with the same
/// problem-details body as every other client error.
pub struct ItemId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for ItemId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("request body is required".to_string()));
    }
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(AppError::BadRequest("request body is required".to_string())),
        Err(e) => Err(AppError::BadRequest(format!("invalid request body: {e}"))),
    }
}

pub async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = store.list().await?;
    tracing::debug!(count = items.len(), "listed todo items");
    Ok(Json(items))
}

pub async fn get_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
) -> Result<Json<TodoItem>, AppError> {
    store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

pub async fn create_item(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input: NewItem = decode_body(&body)?;
    let item = store.add(input).await?;
    tracing::info!(id = item.id, name = %item.name, "created todo item");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, item_location(item.id))],
        Json(item),
    ))
}

/// Full replacement of the mutable fields. The id in the body must match the
/// path; it is never reassigned.
pub async fn update_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let input: TodoItem = decode_body(&body)?;
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            input.id
        )));
    }

    let mut existing = store.find_by_id(id).await?.ok_or(AppError::NotFound(id))?;
    existing.name = input.name;
    existing.is_complete = input.is_complete;
    if !store.update(&existing).await? {
        return Err(AppError::NotFound(id));
    }

    tracing::info!(id, is_complete = existing.is_complete, "updated todo item");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
) -> Result<StatusCode, AppError> {
    let existing = store.find_by_id(id).await?.ok_or(AppError::NotFound(id))?;
    // Another request may have removed it since the lookup.
    if !store.remove(&existing).await? {
        return Err(AppError::NotFound(id));
    }
    tracing::info!(id, "deleted todo item");
    Ok(StatusCode::NO_CONTENT)
}
