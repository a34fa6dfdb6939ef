//! Middleware de autenticación del panel de administración
//!
//! Todas las rutas bajo /api/admin (salvo el login) exigen un token de
//! sesión válido en el header Authorization. Token ausente o expirado
//! -> 401; firma inválida -> 403.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_admin_token;

pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("Access denied. No token provided.".to_string())
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized("Access denied. No token provided.".to_string())
        })?;

    let claims = verify_admin_token(token, &state.jwt_config())?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
