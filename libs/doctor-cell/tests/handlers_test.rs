use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use doctor_cell::medico_routes;
use shared_config::AppConfig;
use shared_database::patients::PatientsClient;
use shared_database::{postgres, AppState};

// The pool is lazy, so routes that reject before touching storage can be
// exercised without a live database.
fn test_state() -> Arc<AppState> {
    let config = AppConfig {
        pg_host: "127.0.0.1".to_string(),
        pg_port: 5432,
        pg_user: "postgres".to_string(),
        pg_password: String::new(),
        pg_database: "postgres".to_string(),
        pacientes_api_url: "http://127.0.0.1:1".to_string(),
        port: 0,
    };

    Arc::new(AppState {
        pool: postgres::connect_lazy(&config),
        patients: PatientsClient::new(&config).unwrap(),
    })
}

#[tokio::test]
async fn malformed_registration_body_is_rejected_with_400() {
    let app = medico_routes(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/medico")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"nombre": "Ana"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_medico_id_is_rejected() {
    let app = medico_routes(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/medico/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
