use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn consulta_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/consulta", post(handlers::create_consulta))
        .route("/consulta/{consulta_id}", get(handlers::get_consulta))
        .route("/consultas", get(handlers::list_consultas))
        .route("/consultas/paciente/{paciente_id}", get(handlers::list_by_paciente))
        .route("/consultas/medico/{medico_id}", get(handlers::list_by_medico))
        .with_state(state)
}
