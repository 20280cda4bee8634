use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::extract::AppJson;

use crate::models::{CreateMedicoRequest, Medico};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_medico(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateMedicoRequest>,
) -> Result<(StatusCode, Json<Medico>), AppError> {
    let service = DoctorService::new(&state);

    let medico = service.create_medico(request).await?;

    Ok((StatusCode::CREATED, Json(medico)))
}

#[axum::debug_handler]
pub async fn get_medico(
    State(state): State<Arc<AppState>>,
    Path(medico_id): Path<i32>,
) -> Result<Json<Medico>, AppError> {
    let service = DoctorService::new(&state);

    let medico = service.get_medico(medico_id).await?;

    Ok(Json(medico))
}

#[axum::debug_handler]
pub async fn list_medicos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Medico>>, AppError> {
    let service = DoctorService::new(&state);

    let medicos = service.list_medicos().await?;

    Ok(Json(medicos))
}
