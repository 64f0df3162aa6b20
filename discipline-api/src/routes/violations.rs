use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::AddViolationResponse,
    app_state::AppState,
    domain::models::{NewViolation, Violation},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_violations).post(add_violation))
}

#[instrument(name = "list_violations", skip(app_state))]
async fn list_violations(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Violation>>, ApiError> {
    let violations = app_state.records.list_violations().await?;

    Ok(Json(violations))
}

#[instrument(name = "add_violation", skip(app_state))]
async fn add_violation(
    State(app_state): State<AppState>,
    payload: Result<Json<NewViolation>, JsonRejection>,
) -> Result<(StatusCode, Json<AddViolationResponse>), ApiError> {
    let Json(body) = payload?;
    let violation = app_state.records.add_violation(body).await?;

    Ok((StatusCode::CREATED, Json(violation.into())))
}
