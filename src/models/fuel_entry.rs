//! Modelo de FuelEntry
//!
//! Un repostaje: litros, precio por litro y lectura del odómetro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelEntry {
    /// 0 = sin asignar; el store asigna el id definitivo al guardar
    pub id: u64,
    pub liters: f64,
    pub price_per_liter: f64,
    /// Kilómetros acumulados desde la primera lectura registrada del coche
    pub odometer: u64,
    /// Siempre liters * price_per_liter; se calcula al construir, nunca se recibe
    pub total_cost: f64,
    pub timestamp: DateTime<Utc>,
}

impl FuelEntry {
    pub fn new(liters: f64, price_per_liter: f64, odometer: u64) -> Self {
        Self {
            id: 0,
            liters,
            price_per_liter,
            odometer,
            total_cost: liters * price_per_liter,
            timestamp: Utc::now(),
        }
    }
}
