//! Modelo de Car
//!
//! Vehículo de la flota. El campo `name` funciona como clave de clase de
//! vehículo ("Sedan", "SUV") que los leads copian como texto libre: no hay
//! integridad referencial entre cars y leads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub models: String,
    pub capacity: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub car_type: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de vehículo aportados por el administrador (sin identidad)
#[derive(Debug, Clone)]
pub struct CarData {
    pub name: String,
    pub models: String,
    pub capacity: String,
    pub car_type: String,
}
