use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use shared_config::AppConfig;

const CREATE_MEDICO: &str = "
    CREATE TABLE IF NOT EXISTS medico (
        id SERIAL PRIMARY KEY,
        nombre VARCHAR(50) NOT NULL,
        apellido VARCHAR(50) NOT NULL,
        especialidad VARCHAR(50) NOT NULL
    )";

const CREATE_CONSULTA: &str = "
    CREATE TABLE IF NOT EXISTS consulta (
        id SERIAL PRIMARY KEY,
        fecha DATE NOT NULL,
        descripcion VARCHAR(255) NOT NULL,
        paciente_id INTEGER NOT NULL,
        medico_id INTEGER REFERENCES medico(id)
    )";

fn connect_options(config: &AppConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.pg_host)
        .port(config.pg_port)
        .username(&config.pg_user)
        .password(&config.pg_password)
        .database(&config.pg_database)
}

pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to postgres at {}:{}/{}",
        config.pg_host, config.pg_port, config.pg_database
    );

    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options(config))
        .await
}

/// Pool that defers connecting until first use. Handler tests run against it
/// without a live database.
pub fn connect_lazy(config: &AppConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(connect_options(config))
}

/// Idempotent schema setup. `medico` must exist before `consulta` because of
/// the foreign key.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MEDICO).execute(pool).await?;
    sqlx::query(CREATE_CONSULTA).execute(pool).await?;

    info!("Database schema ready");
    Ok(())
}
