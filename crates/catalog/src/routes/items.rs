//! Item handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use shopfront_core::{Item, ItemId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every item.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items().to_vec())
}

/// Fetch one item by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Item>> {
    let id: ItemId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid item id '{id}'")))?;

    state
        .item(id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound(id))
}
