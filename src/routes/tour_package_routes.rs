use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::TourPackageController;
use crate::dto::tour_package_dto::{TourPackageRequest, TourPackageResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectura pública: lista y página de detalle
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages))
        .route("/:id", get(get_package))
}

/// CRUD de paquetes (detrás del middleware de administración)
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route("/:id", put(update_package))
        .route("/:id", delete(delete_package))
}

async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<TourPackageResponse>>, AppError> {
    let controller = TourPackageController::new(state.tour_packages.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TourPackageResponse>, AppError> {
    let controller = TourPackageController::new(state.tour_packages.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_package(
    State(state): State<AppState>,
    Json(request): Json<TourPackageRequest>,
) -> Result<(StatusCode, Json<TourPackageResponse>), AppError> {
    let controller = TourPackageController::new(state.tour_packages.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TourPackageRequest>,
) -> Result<Json<TourPackageResponse>, AppError> {
    let controller = TourPackageController::new(state.tour_packages.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = TourPackageController::new(state.tour_packages.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
