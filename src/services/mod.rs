//! Servicios de la aplicación
//!
//! Autenticación del panel y notificación de leads.

pub mod auth_service;
pub mod notification_service;

pub use auth_service::{AuthService, CredentialVerifier, SharedSecretVerifier};
pub use notification_service::{DisabledNotifier, LeadNotifier, WhatsAppNotifier};
