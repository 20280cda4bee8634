use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use doctor_cell::store::PgMedicoStore;
use shared_database::patients::{Paciente, PatientLookupError, PatientsClient};

use crate::models::{Consulta, ConsultaPorMedico, ConsultaPorPaciente, CreateConsultaRequest};

/// All-consultas listing is capped; pagination is out of scope.
const LIST_LIMIT: i64 = 100;

/// Row access for the `consulta` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsultaStore: Send + Sync {
    async fn insert(&self, request: &CreateConsultaRequest) -> Result<Consulta>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Consulta>>;

    /// Joined against `medico`; rows whose medico is gone are excluded.
    async fn find_by_paciente(&self, paciente_id: i32) -> Result<Vec<ConsultaPorPaciente>>;

    async fn find_by_medico(&self, medico_id: i32) -> Result<Vec<ConsultaPorMedico>>;

    async fn list(&self) -> Result<Vec<Consulta>>;
}

/// Existence check against the medico registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    async fn medico_exists(&self, medico_id: i32) -> Result<bool>;
}

/// Lookup against the external pacientes service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn lookup(&self, paciente_id: i32) -> Result<Paciente, PatientLookupError>;
}

#[derive(Clone)]
pub struct PgConsultaStore {
    pool: PgPool,
}

impl PgConsultaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConsultaStore for PgConsultaStore {
    async fn insert(&self, request: &CreateConsultaRequest) -> Result<Consulta> {
        let consulta = sqlx::query_as::<_, Consulta>(
            "INSERT INTO consulta (fecha, descripcion, paciente_id, medico_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(request.fecha)
        .bind(&request.descripcion)
        .bind(request.paciente_id)
        .bind(request.medico_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(consulta)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Consulta>> {
        let consulta = sqlx::query_as::<_, Consulta>("SELECT * FROM consulta WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(consulta)
    }

    async fn find_by_paciente(&self, paciente_id: i32) -> Result<Vec<ConsultaPorPaciente>> {
        let rows = sqlx::query_as::<_, ConsultaPorPaciente>(
            "SELECT consulta.fecha, consulta.descripcion, consulta.paciente_id, \
                    medico.nombre AS nombre_medico \
             FROM consulta \
             JOIN medico ON consulta.medico_id = medico.id \
             WHERE consulta.paciente_id = $1",
        )
        .bind(paciente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_medico(&self, medico_id: i32) -> Result<Vec<ConsultaPorMedico>> {
        let rows = sqlx::query_as::<_, ConsultaPorMedico>(
            "SELECT fecha, descripcion, paciente_id FROM consulta WHERE medico_id = $1",
        )
        .bind(medico_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list(&self) -> Result<Vec<Consulta>> {
        let rows = sqlx::query_as::<_, Consulta>("SELECT * FROM consulta LIMIT $1")
            .bind(LIST_LIMIT)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

#[async_trait]
impl DoctorDirectory for PgMedicoStore {
    async fn medico_exists(&self, medico_id: i32) -> Result<bool> {
        Ok(self.exists(medico_id).await?)
    }
}

#[async_trait]
impl PatientDirectory for PatientsClient {
    async fn lookup(&self, paciente_id: i32) -> Result<Paciente, PatientLookupError> {
        PatientsClient::lookup(self, paciente_id).await
    }
}
