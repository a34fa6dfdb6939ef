//! Routers de la API
//!
//! Un router por entidad con su parte pública y su parte de
//! administración; las rutas de administración se agrupan bajo
//! /api/admin detrás del middleware de autenticación.

pub mod auth_routes;
pub mod car_routes;
pub mod lead_routes;
pub mod route_routes;
pub mod tour_package_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::auth_middleware::require_admin;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Aplicación completa lista para servir (o para los tests)
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", create_api_router(state.clone()))
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Router completo de la API (se monta bajo /api)
pub fn create_api_router(state: AppState) -> Router<AppState> {
    // Todo lo que cuelga de /admin exige sesión, salvo el login que se
    // mergea después del route_layer
    let admin = Router::new()
        .nest("/leads", lead_routes::admin_router())
        .nest("/routes", route_routes::admin_router())
        .nest("/cars", car_routes::admin_router())
        .nest("/tour-packages", tour_package_routes::admin_router())
        .route_layer(middleware::from_fn_with_state(state, require_admin))
        .merge(auth_routes::router());

    Router::new()
        .nest("/leads", lead_routes::public_router())
        .nest("/routes", route_routes::public_router())
        .nest("/cars", car_routes::public_router())
        .nest("/tour-packages", tour_package_routes::public_router())
        .nest("/admin", admin)
}
