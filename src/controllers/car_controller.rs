use std::sync::Arc;

use crate::dto::car_dto::{ApiResponse, CarResponse, CreateCarRequest};
use crate::repositories::car_repository::CarRepository;
use crate::services::car_service::CarService;
use crate::utils::errors::AppError;

pub struct CarController {
    service: CarService,
}

impl CarController {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self {
            service: CarService::new(repository),
        }
    }

    pub async fn create(
        &self,
        request: CreateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        let car = self.service.create_car(request).await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Car created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<CarResponse>>, AppError> {
        let cars = self.service.get_all_cars().await?;

        Ok(ApiResponse::success(
            cars.into_iter().map(CarResponse::from).collect(),
        ))
    }
}
