pub mod patients;
pub mod postgres;

use anyhow::Result;
use sqlx::PgPool;

use shared_config::AppConfig;

use crate::patients::PatientsClient;

/// Process-scoped resources: one connection pool and one outbound HTTP
/// client, built at startup and injected into the cells via axum state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub patients: PatientsClient,
}

impl AppState {
    /// Connects the pool, makes sure the schema exists and builds the
    /// patients client.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let pool = postgres::connect(config).await?;
        postgres::init_schema(&pool).await?;

        Ok(Self {
            pool,
            patients: PatientsClient::new(config)?,
        })
    }
}
