use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_user: String,
    pub pg_password: String,
    pub pg_database: String,
    pub pacientes_api_url: String,
    pub port: u16,
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, using default '{}'", name, default);
        default.to_string()
    })
}

fn env_port(name: &str, default: u16) -> u16 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid port ('{}'), using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            pg_host: env_or("PG_HOST", "localhost"),
            pg_port: env_port("PG_PORT", 5432),
            pg_user: env_or("PG_USER", "postgres"),
            pg_password: env::var("PG_PASSWORD").unwrap_or_else(|_| {
                warn!("PG_PASSWORD not set, using empty value");
                String::new()
            }),
            pg_database: env_or("PG_DATABASE", "postgres"),
            pacientes_api_url: env_or("PACIENTES_API_URL", "http://pacientes-api:5000"),
            port: env_port("PORT", 3000),
        }
    }
}
