//! Servicio de notificación de leads
//!
//! Aviso por WhatsApp Cloud API al teléfono del operador cuando entra un
//! lead nuevo. Es un canal best-effort: el resultado del intake nunca
//! depende de que el mensaje llegue.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::warn;

use crate::config::environment::EnvironmentConfig;
use crate::models::Lead;
use crate::utils::errors::{AppError, AppResult};

/// Colaborador de notificación de leads nuevos
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify_new_lead(&self, lead: &Lead) -> AppResult<()>;
}

/// Notificador contra la WhatsApp Cloud API (graph.facebook.com)
pub struct WhatsAppNotifier {
    client: Client,
    token: String,
    phone_number_id: String,
    recipient: String,
}

impl WhatsAppNotifier {
    /// `None` si falta cualquiera de las tres credenciales
    pub fn from_config(config: &EnvironmentConfig) -> Option<Self> {
        let token = config.whatsapp_token.clone()?;
        let phone_number_id = config.whatsapp_phone_number_id.clone()?;
        let recipient = config.whatsapp_recipient_phone.clone()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .ok()?;

        Some(Self {
            client,
            token,
            phone_number_id,
            recipient,
        })
    }

    /// Resumen legible de la reserva para el operador
    fn format_message(lead: &Lead) -> String {
        let details = &lead.booking_details;
        let event_suffix = details
            .event
            .as_ref()
            .map(|e| format!(" ({})", e))
            .unwrap_or_default();

        format!(
            "🚀 *New Booking Inquiry - Go Bokaro Cabs*\n\n\
             👤 *Name:* {}\n\
             📞 *Phone:* {}\n\
             📍 *Address:* {}\n\
             🚗 *Vehicle:* {}\n\n\
             🗺️ *Route:* {} to {}\n\
             📅 *Date:* {}\n\
             ⏰ *Time:* {}\n\
             🏷️ *Type:* {}{}\n\n\
             Please contact the customer immediately.",
            lead.name,
            lead.phone,
            lead.address,
            lead.vehicle_type,
            details.from,
            details.to,
            details.date,
            details.time,
            details.trip_type,
            event_suffix,
        )
    }
}

#[async_trait]
impl LeadNotifier for WhatsAppNotifier {
    async fn notify_new_lead(&self, lead: &Lead) -> AppResult<()> {
        let url = format!(
            "https://graph.facebook.com/v19.0/{}/messages",
            self.phone_number_id
        );

        let body = json!({
            "messaging_product": "whatsapp",
            "to": self.recipient,
            "type": "text",
            "text": { "body": Self::format_message(lead) }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("WhatsApp request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "WhatsApp API returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

/// Notificador desactivado: se usa cuando faltan credenciales.
/// Deja constancia en el log y no hace nada más.
pub struct DisabledNotifier;

#[async_trait]
impl LeadNotifier for DisabledNotifier {
    async fn notify_new_lead(&self, lead: &Lead) -> AppResult<()> {
        warn!(
            "WhatsApp notification skipped for lead {}: credentials missing",
            lead.id
        );
        Ok(())
    }
}
