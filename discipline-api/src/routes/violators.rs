use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::AddViolatorResponse,
    app_state::AppState,
    domain::models::{NewViolator, Violator},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_violators).post(add_violator))
}

#[instrument(name = "list_violators", skip(app_state))]
async fn list_violators(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Violator>>, ApiError> {
    let violators = app_state.records.list_violators().await?;

    Ok(Json(violators))
}

#[instrument(name = "add_violator", skip(app_state))]
async fn add_violator(
    State(app_state): State<AppState>,
    payload: Result<Json<NewViolator>, JsonRejection>,
) -> Result<(StatusCode, Json<AddViolatorResponse>), ApiError> {
    let Json(body) = payload?;
    let violator = app_state.records.add_violator(body).await?;

    Ok((StatusCode::CREATED, Json(violator.into())))
}
