use tracing::{debug, error};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{CreateMedicoRequest, Medico};
use crate::store::PgMedicoStore;

pub struct DoctorService {
    store: PgMedicoStore,
}

impl DoctorService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: PgMedicoStore::new(state.pool.clone()),
        }
    }

    /// Registers a medico unconditionally. There is no duplicate detection;
    /// registering the same person twice yields two rows.
    pub async fn create_medico(&self, request: CreateMedicoRequest) -> Result<Medico, AppError> {
        debug!("Registering medico {} {}", request.nombre, request.apellido);

        self.store.insert(&request).await.map_err(|err| {
            error!("Failed to insert medico: {}", err);
            AppError::Database(err.to_string())
        })
    }

    pub async fn get_medico(&self, id: i32) -> Result<Medico, AppError> {
        match self.store.find_by_id(id).await {
            Ok(Some(medico)) => Ok(medico),
            Ok(None) => Err(AppError::NotFound(format!("doctor with id {} not found", id))),
            Err(err) => {
                error!("Failed to fetch medico {}: {}", id, err);
                Err(AppError::Database(err.to_string()))
            }
        }
    }

    pub async fn list_medicos(&self) -> Result<Vec<Medico>, AppError> {
        self.store.list().await.map_err(|err| {
            error!("Failed to list medicos: {}", err);
            AppError::Database(err.to_string())
        })
    }
}
