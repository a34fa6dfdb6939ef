use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::route_dto::{RoutePriceRequest, RoutePriceResponse};
use crate::repositories::RouteRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_positive;

pub struct RouteController {
    repository: Arc<dyn RouteRepository>,
}

impl RouteController {
    pub fn new(repository: Arc<dyn RouteRepository>) -> Self {
        Self { repository }
    }

    fn validate(request: &RoutePriceRequest) -> Result<(), AppError> {
        request.validate()?;

        if validate_positive(request.sedan).is_err() {
            return Err(validation_error("sedan", "sedan price must be a positive number"));
        }
        if validate_positive(request.ertiga).is_err() {
            return Err(validation_error("ertiga", "ertiga price must be a positive number"));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<RoutePriceResponse>, AppError> {
        let routes = self.repository.find_all().await?;

        Ok(routes.into_iter().map(RoutePriceResponse::from).collect())
    }

    pub async fn create(&self, request: RoutePriceRequest) -> Result<RoutePriceResponse, AppError> {
        Self::validate(&request)?;

        let route = self.repository.insert(request.into()).await?;

        Ok(route.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: RoutePriceRequest,
    ) -> Result<RoutePriceResponse, AppError> {
        Self::validate(&request)?;

        self.repository
            .update(id, request.into())
            .await?
            .map(RoutePriceResponse::from)
            .ok_or_else(|| not_found_error("Route", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
