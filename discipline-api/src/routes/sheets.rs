use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::SheetSnapshotResponse, app_state::AppState,
    domain::models::ImportSummary,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(get_snapshot))
        .route("/import", post(import_sheet))
}

#[instrument(name = "get_sheet_snapshot", skip(app_state))]
async fn get_snapshot(
    State(app_state): State<AppState>,
) -> Result<Json<SheetSnapshotResponse>, ApiError> {
    let records = app_state.records.sheet_snapshot().await?;

    Ok(Json(records.into()))
}

#[instrument(name = "import_sheet", skip(app_state))]
async fn import_sheet(State(app_state): State<AppState>) -> Result<Json<ImportSummary>, ApiError> {
    let summary = app_state.records.import_sheet().await?;

    Ok(Json(summary))
}
