use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::{CarRequest, CarResponse};
use crate::repositories::CarRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct CarController {
    repository: Arc<dyn CarRepository>,
}

impl CarController {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_all().await?;

        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn create(&self, request: CarRequest) -> Result<CarResponse, AppError> {
        request.validate()?;

        let car = self.repository.insert(request.into()).await?;

        Ok(car.into())
    }

    pub async fn update(&self, id: Uuid, request: CarRequest) -> Result<CarResponse, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.into())
            .await?
            .map(CarResponse::from)
            .ok_or_else(|| not_found_error("Car", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
