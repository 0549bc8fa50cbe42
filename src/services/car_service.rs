//! Servicio de coches
//!
//! Alta y consulta de coches; la validación ocurre antes de tocar el store.

use std::sync::Arc;

use crate::dto::car_dto::CreateCarRequest;
use crate::models::car::Car;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_not_empty, validate_range};

pub struct CarService {
    repository: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_car(&self, request: CreateCarRequest) -> AppResult<Car> {
        let (brand, model, year) = validate_car(&request)?;
        self.repository.save_car(Car::new(brand, model, year)).await
    }

    pub async fn get_all_cars(&self) -> AppResult<Vec<Car>> {
        self.repository.list_cars().await
    }
}

/// Validar un coche candidato. Devuelve los campos ya comprobados.
pub fn validate_car(request: &CreateCarRequest) -> AppResult<(String, String, i32)> {
    let brand = match &request.brand {
        Some(b) if validate_not_empty(b).is_ok() => b.clone(),
        _ => return Err(AppError::BadRequest("Car brand is required".to_string())),
    };

    let model = match &request.model {
        Some(m) if validate_not_empty(m).is_ok() => m.clone(),
        _ => return Err(AppError::BadRequest("Car model is required".to_string())),
    };

    let year = match request.year {
        Some(y) if validate_range(y, 1900, 2100).is_ok() => y,
        _ => {
            return Err(AppError::BadRequest(
                "Car year must be between 1900 and 2100".to_string(),
            ))
        }
    };

    Ok((brand, model, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(brand: Option<&str>, model: Option<&str>, year: Option<i32>) -> CreateCarRequest {
        CreateCarRequest {
            brand: brand.map(str::to_string),
            model: model.map(str::to_string),
            year,
        }
    }

    #[test]
    fn test_validate_car_ok() {
        let result = validate_car(&request(Some("Toyota"), Some("Corolla"), Some(2018)));
        assert_eq!(
            result.unwrap(),
            ("Toyota".to_string(), "Corolla".to_string(), 2018)
        );
    }

    #[test]
    fn test_validate_car_rejects_missing_or_blank_brand() {
        assert!(validate_car(&request(None, Some("Corolla"), Some(2018))).is_err());
        assert!(validate_car(&request(Some("   "), Some("Corolla"), Some(2018))).is_err());
    }

    #[test]
    fn test_validate_car_rejects_missing_or_blank_model() {
        assert!(validate_car(&request(Some("Toyota"), None, Some(2018))).is_err());
        assert!(validate_car(&request(Some("Toyota"), Some(""), Some(2018))).is_err());
    }

    #[test]
    fn test_validate_car_year_boundaries() {
        assert!(validate_car(&request(Some("Toyota"), Some("Corolla"), Some(1900))).is_ok());
        assert!(validate_car(&request(Some("Toyota"), Some("Corolla"), Some(2100))).is_ok());
        assert!(validate_car(&request(Some("Toyota"), Some("Corolla"), Some(1899))).is_err());
        assert!(validate_car(&request(Some("Toyota"), Some("Corolla"), Some(2101))).is_err());
        assert!(validate_car(&request(Some("Toyota"), Some("Corolla"), None)).is_err());
    }
}
