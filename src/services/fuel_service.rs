//! Servicio de repostajes
//!
//! Contiene la validación de repostajes, la guardia de monotonicidad del
//! odómetro y el cálculo de estadísticas de consumo.

use std::sync::Arc;

use crate::dto::fuel_dto::AddFuelRequest;
use crate::models::fuel_entry::FuelEntry;
use crate::models::fuel_stats::FuelStats;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{validate_non_negative, validate_positive};

pub struct FuelService {
    repository: Arc<dyn CarRepository>,
}

impl FuelService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn add_fuel_entry(
        &self,
        car_id: u64,
        request: AddFuelRequest,
    ) -> AppResult<FuelEntry> {
        let (liters, price_per_liter, odometer) = validate_fuel_entry(&request)?;
        self.repository
            .add_fuel_entry_to_car(car_id, FuelEntry::new(liters, price_per_liter, odometer))
            .await
    }

    pub async fn calculate_fuel_stats(&self, car_id: u64) -> AppResult<FuelStats> {
        let car = self
            .repository
            .find_car_by_id(car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", car_id))?;
        Ok(compute_stats(&car.fuel_entries))
    }

    pub async fn get_fuel_entries_for_car(&self, car_id: u64) -> AppResult<Vec<FuelEntry>> {
        self.repository.get_fuel_entries_for_car(car_id).await
    }
}

/// Validar un repostaje candidato. Devuelve (litros, precio/litro, odómetro)
/// ya comprobados; la ausencia de un campo falla igual que un valor inválido.
pub fn validate_fuel_entry(request: &AddFuelRequest) -> AppResult<(f64, f64, u64)> {
    let liters = match request.liters {
        Some(l) if validate_positive(l).is_ok() => l,
        _ => {
            return Err(AppError::BadRequest(
                "Fuel liters must be positive".to_string(),
            ))
        }
    };

    let price_per_liter = match request.price {
        Some(p) if validate_positive(p).is_ok() => p,
        _ => {
            return Err(AppError::BadRequest(
                "Price per liter must be positive".to_string(),
            ))
        }
    };

    let odometer = match request.odometer {
        Some(o) if validate_non_negative(o).is_ok() => o as u64,
        _ => {
            return Err(AppError::BadRequest(
                "Odometer must be non-negative".to_string(),
            ))
        }
    };

    Ok((liters, price_per_liter, odometer))
}

/// Guardia de monotonicidad: la nueva lectura no puede ser menor que la más
/// alta registrada para el coche. La igualdad se acepta (reentrada
/// correctiva con lectura sin cambios).
pub fn check_odometer(entries: &[FuelEntry], new_odometer: u64) -> AppResult<()> {
    let highest = entries.iter().map(|e| e.odometer).max().unwrap_or(0);
    if new_odometer < highest {
        return Err(AppError::BadRequest(format!(
            "New odometer reading ({}) is less than previous highest ({}). Odometer must always increase.",
            new_odometer, highest
        )));
    }
    Ok(())
}

/// Estadísticas agregadas de un conjunto de repostajes.
///
/// Función pura y total: la entrada vacía produce el resultado cero sin
/// intentar ninguna división.
pub fn compute_stats(entries: &[FuelEntry]) -> FuelStats {
    if entries.is_empty() {
        return FuelStats::default();
    }

    let total_fuel: f64 = entries.iter().map(|e| e.liters).sum();
    // Se suma el coste registrado de cada repostaje, no total_fuel por un
    // precio medio: cada llenado conserva su propio precio
    let total_cost: f64 = entries.iter().map(|e| e.total_cost).sum();

    let average_price_per_liter = if total_fuel > 0.0 {
        total_cost / total_fuel
    } else {
        0.0
    };

    let average_consumption = calculate_average_consumption(entries);
    let cost_per_100km = average_consumption * average_price_per_liter;

    FuelStats {
        total_fuel_liters: round_to(total_fuel, 1),
        total_cost: round_to(total_cost, 2),
        average_consumption: round_to(average_consumption, 1),
        total_entries: entries.len(),
        average_price_per_liter: round_to(average_price_per_liter, 2),
        cost_per_100km: round_to(cost_per_100km, 2),
    }
}

/// Consumo medio en L/100km: se suman combustible y distancia de todos los
/// segmentos válidos y se divide una sola vez al final.
fn calculate_average_consumption(entries: &[FuelEntry]) -> f64 {
    if entries.len() < 2 {
        return 0.0;
    }

    let mut sorted: Vec<&FuelEntry> = entries.iter().collect();
    // sort_by_key es estable: los empates de odómetro conservan el orden de entrada
    sorted.sort_by_key(|e| e.odometer);

    let mut total_fuel_used = 0.0;
    let mut total_distance = 0.0;

    for pair in sorted.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let distance = (current.odometer - previous.odometer) as f64;

        // Solo segmentos con distancia positiva: los litros del repostaje
        // posterior se atribuyen a la distancia recorrida desde el anterior
        if distance > 0.0 {
            total_distance += distance;
            total_fuel_used += current.liters;
        }
    }

    if total_distance == 0.0 {
        return 0.0;
    }

    (total_fuel_used / total_distance) * 100.0
}

/// Redondeo half-up sobre el valor escalado
fn round_to(value: f64, decimal_places: i32) -> f64 {
    let scale = 10f64.powi(decimal_places);
    (value * scale).round() / scale
}
