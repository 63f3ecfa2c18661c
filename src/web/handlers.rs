use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{info, warn};

use super::{AppState, Result, WebError};
use crate::core::{Item, ItemId};

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.repo.list_all())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>> {
    state
        .repo
        .get_by_id(id)
        .map(Json)
        .ok_or(WebError::NotFound(id))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<Item>,
) -> impl IntoResponse {
    let item = state.repo.insert(payload);
    info!(id = item.id, "item created");

    let location = format!("/api/items/{}", item.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(payload): Json<Item>,
) -> Result<StatusCode> {
    if id != payload.id {
        warn!(path_id = id, body_id = payload.id, "rejecting update with mismatched id");
        return Err(WebError::IdMismatch {
            path: id,
            body: payload.id,
        });
    }

    ensure_exists(&state, id)?;

    state.repo.update(payload);
    info!(id, "item updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode> {
    ensure_exists(&state, id)?;

    state.repo.delete(id);
    info!(id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

// The store treats update/delete of an unknown id as a no-op, so the 404
// has to come from here.
fn ensure_exists(state: &AppState, id: ItemId) -> Result<()> {
    if state.repo.get_by_id(id).is_none() {
        return Err(WebError::NotFound(id));
    }
    Ok(())
}
