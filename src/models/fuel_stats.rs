//! Modelo de FuelStats
//!
//! Estadísticas agregadas de consumo. Derivadas siempre del conjunto
//! actual de repostajes de un coche; nunca se persisten ni se cachean.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FuelStats {
    pub total_fuel_liters: f64,
    pub total_cost: f64,
    /// Consumo medio en L/100km
    pub average_consumption: f64,
    pub total_entries: usize,
    pub average_price_per_liter: f64,
    pub cost_per_100km: f64,
}
