//! Read-only views over the current records.

use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::CatalogResponse,
    app_state::AppState,
    domain::models::{Dashboard, RecordStats},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/dashboard", get(get_dashboard))
        .route("/catalog", get(get_catalog))
}

#[instrument(name = "get_stats", skip(app_state))]
async fn get_stats(State(app_state): State<AppState>) -> Result<Json<RecordStats>, ApiError> {
    let stats = app_state.records.stats().await?;

    Ok(Json(stats))
}

#[instrument(name = "get_dashboard", skip(app_state))]
async fn get_dashboard(State(app_state): State<AppState>) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = app_state.records.dashboard().await?;

    Ok(Json(dashboard))
}

async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}
