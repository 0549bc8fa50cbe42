//! Modelo de Car
//!
//! Un coche es el agregado raíz: posee sus repostajes en exclusiva,
//! en orden de inserción.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::fuel_entry::FuelEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// 0 = sin asignar; el store asigna el id definitivo al guardar
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub fuel_entries: Vec<FuelEntry>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    pub fn new(brand: String, model: String, year: i32) -> Self {
        Self {
            id: 0,
            brand,
            model,
            year,
            fuel_entries: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
