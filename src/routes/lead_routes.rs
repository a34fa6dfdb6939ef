use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::LeadController;
use crate::dto::lead_dto::{
    ApiResponse, CreateLeadRequest, LeadResponse, UpdateLeadStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de leads: solo el intake
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(create_lead))
}

/// Rutas de moderación (detrás del middleware de administración)
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads))
        .route("/:id", patch(update_lead_status))
}

async fn create_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LeadResponse>>), AppError> {
    let controller = LeadController::new(state.leads.clone(), state.notifier.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_leads(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadResponse>>, AppError> {
    let controller = LeadController::new(state.leads.clone(), state.notifier.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_lead_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLeadStatusRequest>,
) -> Result<Json<LeadResponse>, AppError> {
    let controller = LeadController::new(state.leads.clone(), state.notifier.clone());
    let response = controller.set_status(id, request).await?;
    Ok(Json(response))
}
