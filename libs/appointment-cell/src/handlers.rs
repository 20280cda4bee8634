use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::extract::AppJson;

use crate::models::{Consulta, ConsultaConPaciente, ConsultaPorPaciente, CreateConsultaRequest};
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn create_consulta(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateConsultaRequest>,
) -> Result<(StatusCode, Json<Consulta>), AppError> {
    let service = AppointmentService::new(&state);

    let consulta = service.create_consulta(request).await?;

    Ok((StatusCode::CREATED, Json(consulta)))
}

#[axum::debug_handler]
pub async fn get_consulta(
    State(state): State<Arc<AppState>>,
    Path(consulta_id): Path<i32>,
) -> Result<Json<Consulta>, AppError> {
    let service = AppointmentService::new(&state);

    let consulta = service.get_consulta(consulta_id).await?;

    Ok(Json(consulta))
}

#[axum::debug_handler]
pub async fn list_consultas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Consulta>>, AppError> {
    let service = AppointmentService::new(&state);

    let consultas = service.list_consultas().await?;

    Ok(Json(consultas))
}

#[axum::debug_handler]
pub async fn list_by_paciente(
    State(state): State<Arc<AppState>>,
    Path(paciente_id): Path<i32>,
) -> Result<Json<Vec<ConsultaPorPaciente>>, AppError> {
    let service = AppointmentService::new(&state);

    let consultas = service.list_by_paciente(paciente_id).await?;

    Ok(Json(consultas))
}

#[axum::debug_handler]
pub async fn list_by_medico(
    State(state): State<Arc<AppState>>,
    Path(medico_id): Path<i32>,
) -> Result<Json<Vec<ConsultaConPaciente>>, AppError> {
    let service = AppointmentService::new(&state);

    let consultas = service.list_by_medico(medico_id).await?;

    Ok(Json(consultas))
}
