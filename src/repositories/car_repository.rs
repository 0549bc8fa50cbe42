//! Repositorio de coches y repostajes
//!
//! Almacén en memoria con generación de ids monotónica propia del store;
//! los callers nunca asignan ids.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::car::Car;
use crate::models::fuel_entry::FuelEntry;
use crate::services::fuel_service::check_odometer;
use crate::utils::errors::{not_found_error, AppError};

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn save_car(&self, car: Car) -> Result<Car, AppError>;

    async fn find_car_by_id(&self, id: u64) -> Result<Option<Car>, AppError>;

    async fn list_cars(&self) -> Result<Vec<Car>, AppError>;

    async fn add_fuel_entry_to_car(
        &self,
        car_id: u64,
        entry: FuelEntry,
    ) -> Result<FuelEntry, AppError>;

    async fn get_fuel_entries_for_car(&self, car_id: u64) -> Result<Vec<FuelEntry>, AppError>;
}

pub struct InMemoryCarRepository {
    cars: RwLock<HashMap<u64, Car>>,
    car_seq: AtomicU64,
    entry_seq: AtomicU64,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self {
            cars: RwLock::new(HashMap::new()),
            car_seq: AtomicU64::new(1),
            entry_seq: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn save_car(&self, mut car: Car) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        if car.id == 0 {
            car.id = self.car_seq.fetch_add(1, Ordering::SeqCst);
        }
        cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn find_car_by_id(&self, id: u64) -> Result<Option<Car>, AppError> {
        let cars = self.cars.read().await;
        Ok(cars.get(&id).cloned())
    }

    async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        let cars = self.cars.read().await;
        let mut all: Vec<Car> = cars.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn add_fuel_entry_to_car(
        &self,
        car_id: u64,
        mut entry: FuelEntry,
    ) -> Result<FuelEntry, AppError> {
        // Lectura del máximo, guardia del odómetro y append bajo un solo
        // write lock: dos adds concurrentes sobre el mismo coche se
        // serializan y el segundo ve la entrada del primero
        let mut cars = self.cars.write().await;
        let car = cars
            .get_mut(&car_id)
            .ok_or_else(|| not_found_error("Car", car_id))?;

        check_odometer(&car.fuel_entries, entry.odometer)?;

        entry.id = self.entry_seq.fetch_add(1, Ordering::SeqCst);
        car.fuel_entries.push(entry.clone());

        Ok(entry)
    }

    async fn get_fuel_entries_for_car(&self, car_id: u64) -> Result<Vec<FuelEntry>, AppError> {
        let cars = self.cars.read().await;
        let car = cars
            .get(&car_id)
            .ok_or_else(|| not_found_error("Car", car_id))?;
        Ok(car.fuel_entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_save_car_assigns_sequential_ids() {
        let repo = InMemoryCarRepository::new();

        let first = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();
        let second = repo
            .save_car(Car::new("Honda".to_string(), "Civic".to_string(), 2020))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list_cars().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_car_with_id_updates_existing() {
        let repo = InMemoryCarRepository::new();

        let mut car = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();
        car.brand = "Toyota Motor".to_string();
        let updated = repo.save_car(car).await.unwrap();

        assert_eq!(updated.id, 1);
        let stored = repo.find_car_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.brand, "Toyota Motor");
        assert_eq!(repo.list_cars().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_fuel_entry_assigns_id_and_appends() {
        let repo = InMemoryCarRepository::new();
        let car = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();

        let entry = repo
            .add_fuel_entry_to_car(car.id, FuelEntry::new(40.0, 1.5, 10000))
            .await
            .unwrap();

        assert_eq!(entry.id, 1);
        assert_eq!(entry.total_cost, 60.0);

        let entries = repo.get_fuel_entries_for_car(car.id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].odometer, 10000);
    }

    #[tokio::test]
    async fn test_add_fuel_entry_unknown_car_is_not_found() {
        let repo = InMemoryCarRepository::new();

        let err = repo
            .add_fuel_entry_to_car(999, FuelEntry::new(40.0, 1.5, 10000))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_fuel_entry_lower_odometer_leaves_store_untouched() {
        let repo = InMemoryCarRepository::new();
        let car = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();

        repo.add_fuel_entry_to_car(car.id, FuelEntry::new(40.0, 1.5, 10000))
            .await
            .unwrap();
        let err = repo
            .add_fuel_entry_to_car(car.id, FuelEntry::new(35.0, 1.6, 9000))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        // Sin escritura parcial: la entrada rechazada no aparece
        let entries = repo.get_fuel_entries_for_car(car.id).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_add_fuel_entry_equal_odometer_is_accepted() {
        let repo = InMemoryCarRepository::new();
        let car = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();

        repo.add_fuel_entry_to_car(car.id, FuelEntry::new(40.0, 1.5, 10000))
            .await
            .unwrap();
        let corrected = repo
            .add_fuel_entry_to_car(car.id, FuelEntry::new(5.0, 1.5, 10000))
            .await
            .unwrap();

        assert_eq!(corrected.id, 2);
        let entries = repo.get_fuel_entries_for_car(car.id).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_distinct_ids() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let car = repo
            .save_car(Car::new("Toyota".to_string(), "Corolla".to_string(), 2018))
            .await
            .unwrap();

        let (a, b) = tokio::join!(
            repo.add_fuel_entry_to_car(car.id, FuelEntry::new(40.0, 1.5, 10000)),
            repo.add_fuel_entry_to_car(car.id, FuelEntry::new(35.0, 1.6, 10000)),
        );

        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.id, b.id);
        let entries = repo.get_fuel_entries_for_car(car.id).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_get_fuel_entries_unknown_car_is_not_found() {
        let repo = InMemoryCarRepository::new();

        let err = repo.get_fuel_entries_for_car(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
