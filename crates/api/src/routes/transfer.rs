use axum::routing::get;
use axum::Router;

use crate::handlers::transfer;
use crate::state::AppState;

/// Export and import at the root path.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(transfer::export).post(transfer::import))
}
