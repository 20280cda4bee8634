use serde::{Deserialize, Serialize};

/// A registered practitioner. Never updated or deleted once created;
/// duplicates are allowed, the id is the only identity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Medico {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMedicoRequest {
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
}
