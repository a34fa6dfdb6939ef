use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{RoutePrice, RoutePriceData};

// Request para crear o actualizar una tarifa de ruta.
// La positividad de los precios se comprueba en el controller.
#[derive(Debug, Deserialize, Validate)]
pub struct RoutePriceRequest {
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
    #[validate(length(min = 1, message = "distance is required"))]
    pub distance: String,
    pub sedan: f64,
    pub ertiga: f64,
}

impl From<RoutePriceRequest> for RoutePriceData {
    fn from(request: RoutePriceRequest) -> Self {
        Self {
            destination: request.destination,
            time: request.time,
            distance: request.distance,
            sedan: request.sedan,
            ertiga: request.ertiga,
        }
    }
}

// Response de tarifa de ruta
#[derive(Debug, Serialize)]
pub struct RoutePriceResponse {
    pub id: Uuid,
    pub destination: String,
    pub time: String,
    pub distance: String,
    pub sedan: f64,
    pub ertiga: f64,
    pub created_at: DateTime<Utc>,
}

impl From<RoutePrice> for RoutePriceResponse {
    fn from(route: RoutePrice) -> Self {
        Self {
            id: route.id,
            destination: route.destination,
            time: route.time,
            distance: route.distance,
            sedan: route.sedan,
            ertiga: route.ertiga,
            created_at: route.created_at,
        }
    }
}
