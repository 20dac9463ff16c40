//! Plant CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::{PlantDraft, PlantPatch};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid plant id".into()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plants = state.store.list_all().await?;
    Ok((StatusCode::OK, Json(plants)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let new = PlantDraft::from_value(body)?.validate()?;
    let plant = state.store.create(&new).await?;
    tracing::info!(id = plant.id, name = %plant.name, "plant created");
    Ok((StatusCode::CREATED, Json(plant)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let plant = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(plant)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let patch = PlantPatch::from_value(body)?;
    let plant = state.store.update(id, &patch).await?.ok_or(AppError::NotFound)?;
    tracing::info!(id, "plant updated");
    Ok((StatusCode::OK, Json(plant)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "plant deleted");
    Ok(StatusCode::NO_CONTENT)
}
