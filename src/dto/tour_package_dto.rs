use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{TourPackage, TourPackageData};

// Request para crear o actualizar un paquete turístico.
// La positividad del precio se comprueba en el controller.
#[derive(Debug, Deserialize, Validate)]
pub struct TourPackageRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub price: f64,
    #[validate(length(min = 1, message = "duration is required"))]
    pub duration: String,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

impl From<TourPackageRequest> for TourPackageData {
    fn from(request: TourPackageRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            duration: request.duration,
            image_url: request.image_url,
        }
    }
}

// Response de paquete turístico
#[derive(Debug, Serialize)]
pub struct TourPackageResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TourPackage> for TourPackageResponse {
    fn from(package: TourPackage) -> Self {
        Self {
            id: package.id,
            title: package.title,
            description: package.description,
            price: package.price,
            duration: package.duration,
            image_url: package.image_url,
            created_at: package.created_at,
        }
    }
}
