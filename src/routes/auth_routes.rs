use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Login del panel: público, cuelga de /api/admin pero sin middleware
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.credentials.clone(), state.jwt_config());
    let response = controller.login(request)?;
    Ok(Json(response))
}
