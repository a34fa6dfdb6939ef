//! Modelo de TourPackage
//!
//! Paquete turístico con lectura pública (lista y detalle) y escritura
//! desde el panel de administración.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paquete turístico
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct TourPackage {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Datos de paquete aportados por el administrador (sin identidad)
#[derive(Debug, Clone)]
pub struct TourPackageData {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub image_url: Option<String>,
}
