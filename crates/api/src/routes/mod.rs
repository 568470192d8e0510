pub mod health;
pub mod item;
pub mod transfer;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   export (GET), import (POST)
///
/// /items                              list, create (?bulk=on for arrays)
/// /items/{id}                         get, update, delete (cascades)
/// /items/{id}/children                list, create
/// /items/{id}/children/{child_id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(transfer::router())
        .nest("/items", item::router())
}
