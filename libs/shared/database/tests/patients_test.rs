use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_database::patients::{PatientLookupError, PatientsClient};

fn client_for(server: &MockServer) -> PatientsClient {
    PatientsClient::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn lookup_returns_patient_attributes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "nombre": "Maria Lopez",
            "dni": "40123456",
            "fecha_nac": "1990-04-12",
            "sexo": "F"
        })))
        .mount(&server)
        .await;

    let paciente = client_for(&server).lookup(42).await.unwrap();

    assert_eq!(paciente.id, 42);
    assert_eq!(paciente.nombre, "Maria Lopez");
    assert_eq!(paciente.dni.as_deref(), Some("40123456"));
}

#[tokio::test]
async fn remote_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Paciente no encontrado"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup(99).await;

    assert_matches!(result, Err(PatientLookupError::NotFound));
}

#[tokio::test]
async fn empty_body_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup(7).await;

    assert_matches!(result, Err(PatientLookupError::NotFound));
}

#[tokio::test]
async fn null_body_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup(7).await;

    assert_matches!(result, Err(PatientLookupError::NotFound));
}

#[tokio::test]
async fn server_error_is_unavailable_not_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup(7).await;

    assert_matches!(result, Err(PatientLookupError::Unavailable(_)));
}

#[tokio::test]
async fn malformed_body_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).lookup(7).await;

    assert_matches!(result, Err(PatientLookupError::Unavailable(_)));
}

#[tokio::test]
async fn unreachable_upstream_is_unavailable() {
    // Nothing listens here.
    let client = PatientsClient::with_base_url("http://127.0.0.1:1").unwrap();

    let result = client.lookup(1).await;

    assert_matches!(result, Err(PatientLookupError::Unavailable(_)));
}
