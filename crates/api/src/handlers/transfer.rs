//! Whole-catalog export (`GET /`) and import (`POST /`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::transfer::{ExportOutcome, ImportSummary, ItemDescriptor};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /
///
/// 204 with no body when there is nothing to export.
pub async fn export(State(state): State<AppState>) -> AppResult<Response> {
    match state.transfer.export_all().await? {
        ExportOutcome::NoContent => Ok(StatusCode::NO_CONTENT.into_response()),
        ExportOutcome::Document(document) => Ok(Json(document).into_response()),
    }
}

/// POST /
///
/// Not atomic: on failure, records created before the failing descriptor
/// are kept and the error is returned.
pub async fn import(
    State(state): State<AppState>,
    JsonBody(document): JsonBody<Vec<ItemDescriptor>>,
) -> AppResult<(StatusCode, Json<ImportSummary>)> {
    let report = state.transfer.import_all(&document).await?;
    Ok((StatusCode::CREATED, Json(report.summary())))
}
