use std::sync::Arc;

use crate::dto::car_dto::ApiResponse;
use crate::dto::fuel_dto::{AddFuelRequest, FuelEntryResponse, FuelStatsResponse};
use crate::repositories::car_repository::CarRepository;
use crate::services::fuel_service::FuelService;
use crate::utils::errors::AppError;

pub struct FuelController {
    service: FuelService,
}

impl FuelController {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self {
            service: FuelService::new(repository),
        }
    }

    pub async fn add_entry(
        &self,
        car_id: u64,
        request: AddFuelRequest,
    ) -> Result<ApiResponse<FuelEntryResponse>, AppError> {
        let entry = self.service.add_fuel_entry(car_id, request).await?;

        Ok(ApiResponse::success_with_message(
            entry.into(),
            "Fuel entry added successfully".to_string(),
        ))
    }

    pub async fn list_entries(
        &self,
        car_id: u64,
    ) -> Result<ApiResponse<Vec<FuelEntryResponse>>, AppError> {
        let entries = self.service.get_fuel_entries_for_car(car_id).await?;

        Ok(ApiResponse::success(
            entries.into_iter().map(FuelEntryResponse::from).collect(),
        ))
    }

    pub async fn stats(&self, car_id: u64) -> Result<ApiResponse<FuelStatsResponse>, AppError> {
        let stats = self.service.calculate_fuel_stats(car_id).await?;

        Ok(ApiResponse::success(stats.into()))
    }
}
