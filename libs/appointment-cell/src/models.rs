use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted consulta row. Immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Consulta {
    pub id: i32,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub paciente_id: i32,
    pub medico_id: i32,
}

/// Registration body. The wire contract uses camelCase for the two foreign
/// ids (`pacienteId`, `medicoId`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultaRequest {
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub paciente_id: i32,
    pub medico_id: i32,
}

/// Listing row for a patient's consultas, joined with the medico name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConsultaPorPaciente {
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub paciente_id: i32,
    pub nombre_medico: String,
}

/// Raw listing row for a medico's consultas, before patient-name enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConsultaPorMedico {
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub paciente_id: i32,
}

/// A medico's consulta enriched with the patient name fetched from the
/// external pacientes service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultaConPaciente {
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub paciente_id: i32,
    pub paciente_nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case_ids() {
        let request: CreateConsultaRequest = serde_json::from_str(
            r#"{
                "fecha": "2024-06-01",
                "descripcion": "control anual",
                "pacienteId": 4,
                "medicoId": 9
            }"#,
        )
        .unwrap();

        assert_eq!(request.fecha, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(request.paciente_id, 4);
        assert_eq!(request.medico_id, 9);
    }

    #[test]
    fn persisted_consulta_serializes_snake_case() {
        let consulta = Consulta {
            id: 1,
            fecha: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            descripcion: "control anual".to_string(),
            paciente_id: 4,
            medico_id: 9,
        };

        let value = serde_json::to_value(&consulta).unwrap();
        assert_eq!(value["fecha"], "2024-06-01");
        assert_eq!(value["paciente_id"], 4);
        assert_eq!(value["medico_id"], 9);
    }

    #[test]
    fn enriched_row_carries_paciente_nombre() {
        let row = ConsultaConPaciente {
            fecha: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            descripcion: "control anual".to_string(),
            paciente_id: 4,
            paciente_nombre: "Maria Lopez".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["paciente_nombre"], "Maria Lopez");
    }
}
