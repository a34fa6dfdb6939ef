use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Car, CarData};

// Request para crear o actualizar un vehículo de la flota
#[derive(Debug, Deserialize, Validate)]
pub struct CarRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "models is required"))]
    pub models: String,
    #[validate(length(min = 1, message = "capacity is required"))]
    pub capacity: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub car_type: String,
}

impl From<CarRequest> for CarData {
    fn from(request: CarRequest) -> Self {
        Self {
            name: request.name,
            models: request.models,
            capacity: request.capacity,
            car_type: request.car_type,
        }
    }
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub name: String,
    pub models: String,
    pub capacity: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            models: car.models,
            capacity: car.capacity,
            car_type: car.car_type,
            created_at: car.created_at,
        }
    }
}
