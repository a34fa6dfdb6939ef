//! Modelo de Lead
//!
//! Este módulo contiene el struct Lead (consulta de reserva enviada por un
//! cliente) y su ciclo de vida de estados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Estado de moderación de un lead
///
/// Los cuatro estados forman un conjunto sin grafo de transiciones:
/// cualquier estado puede pasar a cualquier otro.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Booked,
    Cancelled,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Booked => "booked",
            LeadStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "booked" => Ok(LeadStatus::Booked),
            "cancelled" => Ok(LeadStatus::Cancelled),
            other => Err(format!("unknown lead status '{}'", other)),
        }
    }
}

/// Detalle del viaje solicitado dentro de un lead
///
/// `trip_type` y `event` llegan como texto libre del cliente y se
/// almacenan tal cual (solo el estado del lead está acotado a un enum).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub from: String,
    pub to: String,
    pub date: String,
    pub time: String,
    pub trip_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

/// Lead principal: consulta de reserva con datos de contacto
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub vehicle_type: String,
    pub booking_details: BookingDetails,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Datos para crear un lead nuevo
///
/// El id, el timestamp y el estado inicial (`new`) los asigna el
/// repositorio, nunca el cliente.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub vehicle_type: String,
    pub booking_details: BookingDetails,
}
