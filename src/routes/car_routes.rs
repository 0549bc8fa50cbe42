use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{ApiResponse, CarResponse, CreateCarRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CarResponse>>), AppError> {
    let controller = CarController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_cars(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CarResponse>>>, AppError> {
    let controller = CarController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
