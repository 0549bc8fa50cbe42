use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::fuel_entry::FuelEntry;
use crate::models::fuel_stats::FuelStats;

// Request para añadir un repostaje. El campo "price" del payload es el
// precio por litro, no el importe total del repostaje.
#[derive(Debug, Deserialize)]
pub struct AddFuelRequest {
    pub liters: Option<f64>,
    pub price: Option<f64>,
    pub odometer: Option<i64>,
}

// Response de repostaje
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntryResponse {
    pub id: u64,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub odometer: u64,
    pub timestamp: DateTime<Utc>,
}

impl From<FuelEntry> for FuelEntryResponse {
    fn from(entry: FuelEntry) -> Self {
        Self {
            id: entry.id,
            liters: entry.liters,
            price_per_liter: entry.price_per_liter,
            total_cost: entry.total_cost,
            odometer: entry.odometer,
            timestamp: entry.timestamp,
        }
    }
}

// Response de estadísticas de consumo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatsResponse {
    pub total_fuel_liters: f64,
    pub total_cost: f64,
    pub average_consumption: f64,
    pub total_entries: usize,
    pub average_price_per_liter: f64,
    pub cost_per_100km: f64,
}

impl From<FuelStats> for FuelStatsResponse {
    fn from(stats: FuelStats) -> Self {
        Self {
            total_fuel_liters: stats.total_fuel_liters,
            total_cost: stats.total_cost,
            average_consumption: stats.average_consumption,
            total_entries: stats.total_entries,
            average_price_per_liter: stats.average_price_per_liter,
            cost_per_100km: stats.cost_per_100km,
        }
    }
}

// Parámetros del endpoint de estadísticas por query string
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatsQuery {
    pub car_id: Option<u64>,
}
