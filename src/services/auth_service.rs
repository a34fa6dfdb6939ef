//! Servicio de autenticación del panel de administración
//!
//! La verificación de credenciales queda detrás de un trait para poder
//! sustituir el secreto compartido único por credenciales por usuario sin
//! tocar la emisión del token.

use std::sync::Arc;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_admin_token, JwtConfig};

/// Verificador de credenciales del administrador
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, password: &str) -> bool;
}

/// Verificación contra el secreto compartido configurado.
/// Hay un único rol de administrador, sin identidad por usuario.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, password: &str) -> bool {
        password == self.secret
    }
}

/// Servicio de login: verifica la credencial y emite el token de sesión
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, jwt: JwtConfig) -> Self {
        Self { verifier, jwt }
    }

    /// Credencial incorrecta -> 401 sin token; correcta -> JWT de 24 horas
    pub fn login(&self, password: &str) -> AppResult<String> {
        if !self.verifier.verify(password) {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        generate_admin_token(&self.jwt)
    }
}
