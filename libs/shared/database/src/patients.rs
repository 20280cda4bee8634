use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use shared_config::AppConfig;

/// Upstream calls never block a request for longer than this.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Patient attributes as the pacientes service returns them. Only `nombre`
/// is relied upon; the rest ride along for callers that want them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paciente {
    pub id: i32,
    pub nombre: String,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub fecha_nac: Option<String>,
    #[serde(default)]
    pub sexo: Option<String>,
}

/// "The patient does not exist" and "the patient service is broken" are
/// different outcomes and callers must not conflate them.
#[derive(Debug, Error)]
pub enum PatientLookupError {
    #[error("paciente not found")]
    NotFound,

    #[error("patient service unavailable: {0}")]
    Unavailable(String),
}

/// Thin client for the external pacientes service.
#[derive(Clone)]
pub struct PatientsClient {
    client: Client,
    base_url: String,
}

impl PatientsClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_base_url(&config.pacientes_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Asks the pacientes service whether `paciente_id` exists.
    ///
    /// A remote 404 or a successful response with an empty/null body means
    /// the patient does not exist; anything else that goes wrong is an
    /// upstream availability problem.
    pub async fn lookup(&self, paciente_id: i32) -> Result<Paciente, PatientLookupError> {
        let url = format!("{}/pacientes/{}", self.base_url, paciente_id);
        debug!("Looking up paciente at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| PatientLookupError::Unavailable(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PatientLookupError::NotFound);
        }
        if !status.is_success() {
            return Err(PatientLookupError::Unavailable(format!(
                "unexpected status {} from patient service",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| PatientLookupError::Unavailable(err.to_string()))?;

        if body.trim().is_empty() {
            return Err(PatientLookupError::NotFound);
        }

        match serde_json::from_str::<Option<Paciente>>(&body) {
            Ok(Some(paciente)) => Ok(paciente),
            Ok(None) => Err(PatientLookupError::NotFound),
            Err(err) => Err(PatientLookupError::Unavailable(format!(
                "invalid patient service response: {}",
                err
            ))),
        }
    }
}
