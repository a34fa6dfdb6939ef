use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::RouteController;
use crate::dto::route_dto::{RoutePriceRequest, RoutePriceResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectura pública de tarifas
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(list_routes))
}

/// CRUD de tarifas (detrás del middleware de administración)
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoutePriceResponse>>, AppError> {
    let controller = RouteController::new(state.routes.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<RoutePriceRequest>,
) -> Result<(StatusCode, Json<RoutePriceResponse>), AppError> {
    let controller = RouteController::new(state.routes.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RoutePriceRequest>,
) -> Result<Json<RoutePriceResponse>, AppError> {
    let controller = RouteController::new(state.routes.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = RouteController::new(state.routes.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
