//! Route definitions for items and their dependents.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dependent, item};
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                              -> item::list
/// POST   /                              -> item::create
/// GET    /{id}                          -> item::get_by_id
/// PUT    /{id}                          -> item::update
/// DELETE /{id}                          -> item::delete
///
/// GET    /{id}/children                 -> dependent::list_by_item
/// POST   /{id}/children                 -> dependent::create
/// GET    /{id}/children/{child_id}      -> dependent::get_by_id
/// PUT    /{id}/children/{child_id}      -> dependent::update
/// DELETE /{id}/children/{child_id}      -> dependent::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list).post(item::create))
        .route(
            "/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
        .route(
            "/{id}/children",
            get(dependent::list_by_item).post(dependent::create),
        )
        .route(
            "/{id}/children/{child_id}",
            get(dependent::get_by_id)
                .put(dependent::update)
                .delete(dependent::delete),
        )
}
