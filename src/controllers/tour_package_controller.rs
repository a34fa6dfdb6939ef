use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::tour_package_dto::{TourPackageRequest, TourPackageResponse};
use crate::repositories::TourPackageRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_positive;

pub struct TourPackageController {
    repository: Arc<dyn TourPackageRepository>,
}

impl TourPackageController {
    pub fn new(repository: Arc<dyn TourPackageRepository>) -> Self {
        Self { repository }
    }

    fn validate(request: &TourPackageRequest) -> Result<(), AppError> {
        request.validate()?;

        if validate_positive(request.price).is_err() {
            return Err(validation_error("price", "price must be a positive number"));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<TourPackageResponse>, AppError> {
        let packages = self.repository.find_all().await?;

        Ok(packages.into_iter().map(TourPackageResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TourPackageResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(TourPackageResponse::from)
            .ok_or_else(|| AppError::NotFound("Package not found".to_string()))
    }

    pub async fn create(
        &self,
        request: TourPackageRequest,
    ) -> Result<TourPackageResponse, AppError> {
        Self::validate(&request)?;

        let package = self.repository.insert(request.into()).await?;

        Ok(package.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: TourPackageRequest,
    ) -> Result<TourPackageResponse, AppError> {
        Self::validate(&request)?;

        self.repository
            .update(id, request.into())
            .await?
            .map(TourPackageResponse::from)
            .ok_or_else(|| not_found_error("Tour package", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryTourPackageRepository;

    fn controller() -> TourPackageController {
        TourPackageController::new(Arc::new(InMemoryTourPackageRepository::new()))
    }

    fn netarhat(price: f64) -> TourPackageRequest {
        serde_json::from_value(serde_json::json!({
            "title": "Netarhat Hill Escape",
            "description": "Two days in the queen of Chotanagpur",
            "price": price,
            "duration": "2D/1N"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let controller = controller();

        let result = controller.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let controller = controller();

        let result = controller.create(netarhat(-1.0)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_then_detail() {
        let controller = controller();

        let created = controller.create(netarhat(8999.0)).await.unwrap();
        let detail = controller.get_by_id(created.id).await.unwrap();

        assert_eq!(detail.title, "Netarhat Hill Escape");
        assert_eq!(detail.price, 8999.0);
    }
}
