use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::CarController;
use crate::dto::car_dto::{CarRequest, CarResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectura pública de la flota
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(list_cars))
}

/// CRUD de la flota (detrás del middleware de administración)
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CarRequest>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = CarController::new(state.cars.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
