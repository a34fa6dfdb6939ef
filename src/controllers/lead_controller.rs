use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::lead_dto::{
    ApiResponse, CreateLeadRequest, LeadResponse, UpdateLeadStatusRequest,
};
use crate::repositories::LeadRepository;
use crate::services::LeadNotifier;
use crate::utils::errors::{not_found_error, AppError};

pub struct LeadController {
    repository: Arc<dyn LeadRepository>,
    notifier: Arc<dyn LeadNotifier>,
}

impl LeadController {
    pub fn new(repository: Arc<dyn LeadRepository>, notifier: Arc<dyn LeadNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Intake público: valida, persiste con estado `new` y avisa al operador
    pub async fn create(
        &self,
        request: CreateLeadRequest,
    ) -> Result<ApiResponse<LeadResponse>, AppError> {
        request.validate()?;

        let lead = self.repository.insert(request.into()).await?;
        info!("New lead received: {} ({})", lead.name, lead.id);

        // Best-effort: el lead ya quedó persistido, un fallo del canal de
        // notificación no cambia la respuesta al cliente
        if let Err(e) = self.notifier.notify_new_lead(&lead).await {
            warn!("Error sending WhatsApp notification: {}", e);
        }

        Ok(ApiResponse::success_with_message(
            lead.into(),
            "Lead received successfully. We will contact you soon!".to_string(),
        ))
    }

    /// Lista de moderación: todos los leads, el más reciente primero
    pub async fn list(&self) -> Result<Vec<LeadResponse>, AppError> {
        let leads = self.repository.find_all().await?;

        Ok(leads.into_iter().map(LeadResponse::from).collect())
    }

    /// Sobrescribe el estado sin restricciones de transición
    pub async fn set_status(
        &self,
        id: Uuid,
        request: UpdateLeadStatusRequest,
    ) -> Result<LeadResponse, AppError> {
        self.repository
            .update_status(id, request.status)
            .await?
            .map(LeadResponse::from)
            .ok_or_else(|| not_found_error("Lead", &id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lead, LeadStatus};
    use crate::repositories::InMemoryLeadRepository;
    use crate::services::DisabledNotifier;
    use crate::utils::errors::AppResult;
    use async_trait::async_trait;

    /// Notificador que siempre falla, para comprobar que el intake
    /// no depende del canal de WhatsApp
    struct FailingNotifier;

    #[async_trait]
    impl LeadNotifier for FailingNotifier {
        async fn notify_new_lead(&self, _lead: &Lead) -> AppResult<()> {
            Err(AppError::ExternalApi("WhatsApp API returned 500".to_string()))
        }
    }

    fn sample_request() -> CreateLeadRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "phone": "9876543210",
            "address": "Sector 4",
            "vehicleType": "Sedan",
            "bookingDetails": {
                "from": "Bokaro",
                "to": "Ranchi",
                "date": "2025-01-10",
                "time": "09:00",
                "tripType": "One Way"
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_persists_with_new_status() {
        let controller = LeadController::new(
            Arc::new(InMemoryLeadRepository::new()),
            Arc::new(DisabledNotifier),
        );

        let response = controller.create(sample_request()).await.unwrap();

        assert!(response.success);
        let lead = response.data.unwrap();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.booking_details.trip_type, "One Way");
    }

    #[tokio::test]
    async fn test_create_succeeds_even_if_notifier_fails() {
        let repository = Arc::new(InMemoryLeadRepository::new());
        let controller = LeadController::new(repository.clone(), Arc::new(FailingNotifier));

        let response = controller.create(sample_request()).await.unwrap();

        assert!(response.success);
        // El lead quedó almacenado a pesar del fallo de notificación
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_request_touches_nothing() {
        let repository = Arc::new(InMemoryLeadRepository::new());
        let controller = LeadController::new(repository.clone(), Arc::new(DisabledNotifier));

        let mut request = sample_request();
        request.phone = "123".to_string();
        let result = controller.create(request).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_status_unknown_id() {
        let controller = LeadController::new(
            Arc::new(InMemoryLeadRepository::new()),
            Arc::new(DisabledNotifier),
        );

        let result = controller
            .set_status(
                Uuid::new_v4(),
                UpdateLeadStatusRequest {
                    status: LeadStatus::Booked,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
