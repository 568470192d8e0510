//! Handlers for dependents, always nested under their item:
//! `/items/{id}/children[/{child_id}]`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::types::DbId;
use catalog_db::models::dependent::{CreateDependent, Dependent, UpdateDependent};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /items/{id}/children
pub async fn list_by_item(
    State(state): State<AppState>,
    PathParam(item_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Dependent>>> {
    let dependents = state.dependents.list_by_item(item_id).await?;
    Ok(Json(dependents))
}

/// POST /items/{id}/children
///
/// The owning item always comes from the URL path.
pub async fn create(
    State(state): State<AppState>,
    PathParam(item_id): PathParam<DbId>,
    JsonBody(input): JsonBody<CreateDependent>,
) -> AppResult<(StatusCode, Json<Dependent>)> {
    let dependent = state.dependents.create(item_id, &input).await?;
    Ok((StatusCode::CREATED, Json(dependent)))
}

/// GET /items/{id}/children/{child_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam((item_id, id)): PathParam<(DbId, DbId)>,
) -> AppResult<Json<Dependent>> {
    let dependent = state.dependents.get(item_id, id).await?;
    Ok(Json(dependent))
}

/// PUT /items/{id}/children/{child_id}
pub async fn update(
    State(state): State<AppState>,
    PathParam((item_id, id)): PathParam<(DbId, DbId)>,
    JsonBody(input): JsonBody<UpdateDependent>,
) -> AppResult<(StatusCode, Json<Dependent>)> {
    let dependent = state.dependents.update(item_id, id, &input).await?;
    Ok((StatusCode::ACCEPTED, Json(dependent)))
}

/// DELETE /items/{id}/children/{child_id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam((item_id, id)): PathParam<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<Dependent>)> {
    let dependent = state.dependents.delete(item_id, id).await?;
    Ok((StatusCode::ACCEPTED, Json(dependent)))
}
