//! Services module
//!
//! Este módulo contiene la lógica de negocio: validación de entradas,
//! guardia de monotonicidad del odómetro y cálculo de estadísticas.

pub mod car_service;
pub mod fuel_service;
