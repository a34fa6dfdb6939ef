use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{BookingDetails, Lead, LeadStatus, NewLead};

// Request público para crear un lead. Los campos desconocidos del body
// (por ejemplo un `status` aportado por el cliente) se ignoran: el estado
// inicial siempre lo fija el servidor.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,
    pub address: String,
    #[validate(length(min = 1, message = "vehicleType is required"))]
    pub vehicle_type: String,
    pub booking_details: BookingDetails,
}

impl From<CreateLeadRequest> for NewLead {
    fn from(request: CreateLeadRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            address: request.address,
            vehicle_type: request.vehicle_type,
            booking_details: request.booking_details,
        }
    }
}

// Request para cambiar el estado de un lead desde el panel
#[derive(Debug, Deserialize)]
pub struct UpdateLeadStatusRequest {
    pub status: LeadStatus,
}

// Response de lead
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub vehicle_type: String,
    pub booking_details: BookingDetails,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            phone: lead.phone,
            address: lead.address,
            vehicle_type: lead.vehicle_type,
            booking_details: lead.booking_details,
            status: lead.status,
            created_at: lead.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
