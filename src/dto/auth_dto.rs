use serde::{Deserialize, Serialize};

// Login request: un único secreto compartido, sin identidad por usuario
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn success(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
        }
    }
}
