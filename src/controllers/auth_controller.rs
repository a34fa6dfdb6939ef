use std::sync::Arc;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::services::{AuthService, CredentialVerifier};
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub struct AuthController {
    auth: AuthService,
}

impl AuthController {
    pub fn new(credentials: Arc<dyn CredentialVerifier>, jwt: JwtConfig) -> Self {
        Self {
            auth: AuthService::new(credentials, jwt),
        }
    }

    /// Login del panel: secreto compartido -> token de sesión de 24 horas
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let token = self.auth.login(&request.password)?;

        Ok(LoginResponse::success(token))
    }
}
