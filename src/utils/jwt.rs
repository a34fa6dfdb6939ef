//! Utilidades JWT para la sesión de administrador
//!
//! Este módulo contiene funciones helper para emitir y verificar
//! el token de sesión del panel de administración.

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del token de administrador
///
/// El token solo transporta el rol: no hay identidad por administrador
/// ni lista de revocación, la validez depende de firma y expiración.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub role: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar el token de sesión de administrador
pub fn generate_admin_token(config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = AdminClaims {
        role: "admin".to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar el token de administrador
///
/// Token expirado -> 401; firma inválida o token malformado -> 403.
pub fn verify_admin_token(token: &str, config: &JwtConfig) -> Result<AdminClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<AdminClaims>(token, &decoding_key, &Validation::default()).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                AppError::Unauthorized("Invalid or expired token.".to_string())
            }
            _ => AppError::Forbidden("Invalid or expired token.".to_string()),
        },
    )?;

    Ok(token_data.claims)
}
