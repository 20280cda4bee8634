use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn medico_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/medico", post(handlers::create_medico))
        .route("/medico/{medico_id}", get(handlers::get_medico))
        .route("/medicos", get(handlers::list_medicos))
        .with_state(state)
}
