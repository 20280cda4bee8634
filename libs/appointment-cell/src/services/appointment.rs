use futures::future::join_all;
use tracing::{debug, error, warn};

use doctor_cell::store::PgMedicoStore;
use shared_database::patients::{PatientLookupError, PatientsClient};
use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{
    Consulta, ConsultaConPaciente, ConsultaPorPaciente, CreateConsultaRequest,
};
use crate::store::{ConsultaStore, DoctorDirectory, PatientDirectory, PgConsultaStore};

/// Placeholder patient name when the per-row lookup fails during enrichment.
pub const UNKNOWN_PACIENTE: &str = "unknown";

pub struct AppointmentService<C, D, P> {
    store: C,
    doctors: D,
    patients: P,
}

impl AppointmentService<PgConsultaStore, PgMedicoStore, PatientsClient> {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: PgConsultaStore::new(state.pool.clone()),
            doctors: PgMedicoStore::new(state.pool.clone()),
            patients: state.patients.clone(),
        }
    }
}

impl<C, D, P> AppointmentService<C, D, P>
where
    C: ConsultaStore,
    D: DoctorDirectory,
    P: PatientDirectory,
{
    pub fn with_parts(store: C, doctors: D, patients: P) -> Self {
        Self {
            store,
            doctors,
            patients,
        }
    }

    /// Registers a consulta. The validation order is part of the contract:
    /// patient existence first, then medico existence, then the insert, each
    /// step short-circuiting.
    pub async fn create_consulta(
        &self,
        request: CreateConsultaRequest,
    ) -> Result<Consulta, AppError> {
        debug!(
            "Registering consulta for paciente {} with medico {}",
            request.paciente_id, request.medico_id
        );

        match self.patients.lookup(request.paciente_id).await {
            Ok(_) => {}
            Err(PatientLookupError::NotFound) => {
                return Err(AppError::NotFound("patient not found".to_string()));
            }
            Err(err) => {
                error!("Paciente lookup failed for {}: {}", request.paciente_id, err);
                return Err(AppError::ServiceUnavailable(
                    "could not verify patient".to_string(),
                ));
            }
        }

        let medico_exists = self
            .doctors
            .medico_exists(request.medico_id)
            .await
            .map_err(|err| {
                error!("Medico existence check failed: {:#}", err);
                AppError::Database(err.to_string())
            })?;
        if !medico_exists {
            return Err(AppError::NotFound("doctor not found".to_string()));
        }

        self.store.insert(&request).await.map_err(|err| {
            error!("Failed to register consulta: {:#}", err);
            AppError::BadRequest("could not register appointment".to_string())
        })
    }

    pub async fn get_consulta(&self, id: i32) -> Result<Consulta, AppError> {
        match self.store.find_by_id(id).await {
            Ok(Some(consulta)) => Ok(consulta),
            Ok(None) => Err(AppError::NotFound(format!(
                "appointment with id {} not found",
                id
            ))),
            Err(err) => {
                error!("Failed to fetch consulta {}: {:#}", id, err);
                Err(AppError::Database(err.to_string()))
            }
        }
    }

    /// Joined listing straight from storage. Zero rows is a valid result.
    pub async fn list_by_paciente(
        &self,
        paciente_id: i32,
    ) -> Result<Vec<ConsultaPorPaciente>, AppError> {
        self.store.find_by_paciente(paciente_id).await.map_err(|err| {
            error!("Failed to list consultas for paciente {}: {:#}", paciente_id, err);
            AppError::Database(err.to_string())
        })
    }

    /// Lists a medico's consultas with the patient name attached. One lookup
    /// is launched per row and gathered back in the original row order; a
    /// failed lookup degrades that row to the placeholder name instead of
    /// failing the listing.
    pub async fn list_by_medico(
        &self,
        medico_id: i32,
    ) -> Result<Vec<ConsultaConPaciente>, AppError> {
        let rows = self.store.find_by_medico(medico_id).await.map_err(|err| {
            error!("Failed to list consultas for medico {}: {:#}", medico_id, err);
            AppError::Database(err.to_string())
        })?;

        let enriched = join_all(rows.into_iter().map(|row| async move {
            let paciente_nombre = match self.patients.lookup(row.paciente_id).await {
                Ok(paciente) => paciente.nombre,
                Err(err) => {
                    warn!("Paciente {} lookup failed, degrading row: {}", row.paciente_id, err);
                    UNKNOWN_PACIENTE.to_string()
                }
            };

            ConsultaConPaciente {
                fecha: row.fecha,
                descripcion: row.descripcion,
                paciente_id: row.paciente_id,
                paciente_nombre,
            }
        }))
        .await;

        Ok(enriched)
    }

    pub async fn list_consultas(&self) -> Result<Vec<Consulta>, AppError> {
        self.store.list().await.map_err(|err| {
            error!("Failed to list consultas: {:#}", err);
            AppError::Database(err.to_string())
        })
    }
}
