//! Rutas de la API
//!
//! Un router por recurso, montados bajo /api.

pub mod car_routes;
pub mod fuel_routes;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/cars", car_routes::create_car_router())
        .nest("/api/cars/:car_id/fuel", fuel_routes::create_fuel_router())
        .route("/api/fuel-stats", get(fuel_routes::get_fuel_stats_by_query))
}
