//! Handlers for the `/items` resource.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::item::item_list_query;
use catalog_core::query::paging::PARAM_SORT_FIELD;
use catalog_core::types::DbId;
use catalog_db::models::item::{CreateItem, Item, ItemPage, UpdateItem};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::ItemDeleted;
use crate::state::AppState;

/// Query parameters accepted by `POST /items`.
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    /// `on` switches the body to an array of items.
    pub bulk: Option<String>,
}

impl CreateParams {
    fn is_bulk(&self) -> bool {
        self.bulk.as_deref() == Some("on")
    }
}

/// GET /items
///
/// Every query key is passed to the filter compiler and sort/page resolver;
/// keys they do not recognize are ignored.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<ItemPage>> {
    let query = item_list_query(&params);
    if query.sort.is_none() {
        if let Some(field) = params.get(PARAM_SORT_FIELD).filter(|f| !f.is_empty()) {
            tracing::debug!(sort_field = %field, "Ignoring unknown sort field");
        }
    }
    let page = state.items.list(&query).await?;
    Ok(Json(page))
}

/// POST /items, or POST /items?bulk=on with an array body.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> AppResult<Response> {
    if params.is_bulk() {
        let inputs: Vec<CreateItem> = parse_body(body)?;
        let items = state.items.create_many(&inputs).await?;
        Ok((StatusCode::CREATED, Json(items)).into_response())
    } else {
        let input: CreateItem = parse_body(body)?;
        let item = state.items.create(&input).await?;
        Ok((StatusCode::CREATED, Json(item)).into_response())
    }
}

/// GET /items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Item>> {
    let item = state.items.get_by_id(id).await?;
    Ok(Json(item))
}

/// PUT /items/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.items.update(id, &input).await?;
    Ok((StatusCode::ACCEPTED, Json(item)))
}

/// DELETE /items/{id}
///
/// Removes the item and every dependent it owns.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<(StatusCode, Json<ItemDeleted>)> {
    let dependents_removed = state.items.delete(id).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ItemDeleted {
            id,
            dependents_removed,
        }),
    ))
}

/// Deserialize a body whose shape depends on the query string.
fn parse_body<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}
