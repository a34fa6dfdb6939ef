//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración más los colaboradores
//! inyectados (almacenamiento, credenciales y notificación).

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    CarRepository, InMemoryCarRepository, InMemoryLeadRepository, InMemoryRouteRepository,
    InMemoryTourPackageRepository, LeadRepository, PgCarRepository, PgLeadRepository,
    PgRouteRepository, PgTourPackageRepository, RouteRepository, TourPackageRepository,
};
use crate::services::{
    CredentialVerifier, DisabledNotifier, LeadNotifier, SharedSecretVerifier, WhatsAppNotifier,
};
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub leads: Arc<dyn LeadRepository>,
    pub routes: Arc<dyn RouteRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub tour_packages: Arc<dyn TourPackageRepository>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub notifier: Arc<dyn LeadNotifier>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            leads: Arc::new(PgLeadRepository::new(pool.clone())),
            routes: Arc::new(PgRouteRepository::new(pool.clone())),
            cars: Arc::new(PgCarRepository::new(pool.clone())),
            tour_packages: Arc::new(PgTourPackageRepository::new(pool)),
            credentials: Arc::new(SharedSecretVerifier::new(config.admin_password.clone())),
            notifier: Self::notifier_from(&config),
            config,
        }
    }

    /// Estado en memoria con el catálogo por defecto (revisión sin base
    /// de datos; también es el backend de los tests de integración)
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self {
            leads: Arc::new(InMemoryLeadRepository::new()),
            routes: Arc::new(InMemoryRouteRepository::with_defaults()),
            cars: Arc::new(InMemoryCarRepository::with_defaults()),
            tour_packages: Arc::new(InMemoryTourPackageRepository::new()),
            credentials: Arc::new(SharedSecretVerifier::new(config.admin_password.clone())),
            notifier: Self::notifier_from(&config),
            config,
        }
    }

    fn notifier_from(config: &EnvironmentConfig) -> Arc<dyn LeadNotifier> {
        match WhatsAppNotifier::from_config(config) {
            Some(notifier) => Arc::new(notifier),
            None => Arc::new(DisabledNotifier),
        }
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::from(&self.config)
    }
}
