use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::fuel_controller::FuelController;
use crate::dto::car_dto::ApiResponse;
use crate::dto::fuel_dto::{AddFuelRequest, FuelEntryResponse, FuelStatsQuery, FuelStatsResponse};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_fuel_entry))
        .route("/", get(list_fuel_entries))
        .route("/stats", get(get_fuel_stats))
}

async fn add_fuel_entry(
    State(state): State<AppState>,
    Path(car_id): Path<u64>,
    Json(request): Json<AddFuelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FuelEntryResponse>>), AppError> {
    let controller = FuelController::new(state.store.clone());
    let response = controller.add_entry(car_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_fuel_entries(
    State(state): State<AppState>,
    Path(car_id): Path<u64>,
) -> Result<Json<ApiResponse<Vec<FuelEntryResponse>>>, AppError> {
    let controller = FuelController::new(state.store.clone());
    let response = controller.list_entries(car_id).await?;
    Ok(Json(response))
}

async fn get_fuel_stats(
    State(state): State<AppState>,
    Path(car_id): Path<u64>,
) -> Result<Json<ApiResponse<FuelStatsResponse>>, AppError> {
    let controller = FuelController::new(state.store.clone());
    let response = controller.stats(car_id).await?;
    Ok(Json(response))
}

/// Variante por query string del endpoint de estadísticas:
/// GET /api/fuel-stats?carId={id}
pub async fn get_fuel_stats_by_query(
    State(state): State<AppState>,
    Query(params): Query<FuelStatsQuery>,
) -> Result<Json<ApiResponse<FuelStatsResponse>>, AppError> {
    let car_id = params
        .car_id
        .ok_or_else(|| bad_request_error("Missing required parameter: carId"))?;

    let controller = FuelController::new(state.store.clone());
    let response = controller.stats(car_id).await?;
    Ok(Json(response))
}
