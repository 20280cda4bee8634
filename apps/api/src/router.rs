use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::consulta_routes;
use doctor_cell::medico_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Consultas Medicas API is running!" }))
        .merge(medico_routes(state.clone()))
        .merge(consulta_routes(state))
}
