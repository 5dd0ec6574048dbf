//! Person handlers

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use person_types::{Person, PersonPayload};

/// Path ids that fail to decode (e.g. invalid UTF-8) are treated like
/// non-numeric ones.
fn parse_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    let Path(raw) = path.map_err(|rejection| ApiError::InvalidId(rejection.body_text()))?;
    raw.parse().map_err(|_| ApiError::InvalidId(raw))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.persons.list().await?;
    Ok(Json(persons))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Person>> {
    // A non-numeric id can never match a stored row
    let id = parse_id(path).map_err(|e| match e {
        ApiError::InvalidId(raw) => ApiError::NotFound(raw),
        other => other,
    })?;
    let person = state.persons.get(id).await?;
    Ok(Json(person))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<Json<Person>> {
    let Json(payload) = payload?;
    let person = state.persons.create(payload).await?;
    Ok(Json(person))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<Json<Person>> {
    // Content-Type is checked before the id
    let payload = payload.map_err(ApiError::from);
    if matches!(payload, Err(ApiError::UnsupportedMediaType)) {
        return Err(ApiError::UnsupportedMediaType);
    }
    let id = parse_id(path)?;
    let Json(payload) = payload?;

    let person = state.persons.rename(id, payload).await?;
    Ok(Json(person))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    match parse_id(path) {
        Ok(id) => state.persons.remove(id).await?,
        Err(e) => tracing::debug!("Nothing to delete: {}", e),
    }
    Ok(StatusCode::NO_CONTENT)
}
