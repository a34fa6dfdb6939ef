//! Modelo de RoutePrice
//!
//! Tarifa por destino mostrada públicamente y administrada desde el panel.
//! La duración y la distancia son strings legibles ("3h 10m", "148 km").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tarifa de una ruta intermunicipal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct RoutePrice {
    pub id: Uuid,
    pub destination: String,
    pub time: String,
    pub distance: String,
    pub sedan: f64,
    pub ertiga: f64,
    pub created_at: DateTime<Utc>,
}

/// Datos de ruta aportados por el administrador (sin identidad)
#[derive(Debug, Clone)]
pub struct RoutePriceData {
    pub destination: String,
    pub time: String,
    pub distance: String,
    pub sedan: f64,
    pub ertiga: f64,
}
