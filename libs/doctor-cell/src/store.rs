use sqlx::PgPool;

use crate::models::{CreateMedicoRequest, Medico};

/// Row access for the `medico` table.
#[derive(Clone)]
pub struct PgMedicoStore {
    pool: PgPool,
}

impl PgMedicoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, request: &CreateMedicoRequest) -> Result<Medico, sqlx::Error> {
        sqlx::query_as::<_, Medico>(
            "INSERT INTO medico (nombre, apellido, especialidad) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.especialidad)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Medico>, sqlx::Error> {
        sqlx::query_as::<_, Medico>("SELECT * FROM medico WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM medico WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Medico>, sqlx::Error> {
        sqlx::query_as::<_, Medico>("SELECT * FROM medico")
            .fetch_all(&self.pool)
            .await
    }
}
